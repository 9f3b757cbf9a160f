//! Experience Store — inserts and queries job experiences in SQLite.

use sqlx::SqlitePool;
use tracing::{error, info};

use crate::experiences::models::{ExperienceRecord, NewExperience};

const SELECT_COLUMNS: &str =
    "SELECT id, job_title, company, responsibilities, COALESCE(skills, '') AS skills FROM job_experience";

/// Owns every persisted `ExperienceRecord`. Records are only ever inserted and read.
#[derive(Debug, Clone)]
pub struct ExperienceStore {
    pool: SqlitePool,
}

impl ExperienceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts one record and returns it with its assigned id.
    ///
    /// Fields are stored exactly as given. The insert is a single statement,
    /// so a failure leaves nothing behind; it is logged and handed back.
    pub async fn insert(&self, new: &NewExperience) -> Result<ExperienceRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, ExperienceRecord>(
            r#"
            INSERT INTO job_experience (job_title, company, responsibilities, skills)
            VALUES (?, ?, ?, ?)
            RETURNING id, job_title, company, responsibilities, COALESCE(skills, '') AS skills
            "#,
        )
        .bind(&new.job_title)
        .bind(&new.company)
        .bind(&new.responsibilities)
        .bind(&new.skills_tag)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error while adding job experience: {e}");
            e
        })?;

        info!("Added job experience {} ({} at {})", record.id, record.job_title, record.company);
        Ok(record)
    }

    /// Every stored record, in insertion order.
    pub async fn find_all(&self) -> Result<Vec<ExperienceRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExperienceRecord>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    /// Records whose skills tag contains at least one of `skills` (case-sensitive substring).
    ///
    /// An empty `skills` slice matches nothing. Each matching record appears once.
    pub async fn find_matches(&self, skills: &[String]) -> Result<Vec<ExperienceRecord>, sqlx::Error> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }

        // instr() is an exact byte search: no case folding, no LIKE wildcards.
        let conditions = vec!["instr(COALESCE(skills, ''), ?) > 0"; skills.len()].join(" OR ");
        let sql = format!("{SELECT_COLUMNS} WHERE {conditions} ORDER BY id");

        let mut query = sqlx::query_as::<_, ExperienceRecord>(&sql);
        for skill in skills {
            query = query.bind(skill);
        }
        query.fetch_all(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn store() -> ExperienceStore {
        ExperienceStore::new(create_pool(":memory:").await.unwrap())
    }

    fn new_experience(title: &str, company: &str, responsibilities: &str, skills: &str) -> NewExperience {
        NewExperience {
            job_title: title.to_string(),
            company: company.to_string(),
            responsibilities: responsibilities.to_string(),
            skills_tag: skills.to_string(),
        }
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_insert_then_find_all_round_trips_fields() {
        let store = store().await;
        let input = new_experience(" Engineer ", "Acme, Inc.", "Built APIs\nand 'tools'", "python,api");

        let inserted = store.insert(&input).await.unwrap();
        let all = store.find_all().await.unwrap();

        assert_eq!(all, vec![inserted.clone()]);
        assert_eq!(inserted.job_title, " Engineer ");
        assert_eq!(inserted.company, "Acme, Inc.");
        assert_eq!(inserted.responsibilities, "Built APIs\nand 'tools'");
        assert_eq!(inserted.skills_tag, "python,api");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let store = store().await;
        let a = store.insert(&new_experience("A", "X", "r", "")).await.unwrap();
        let b = store.insert(&new_experience("B", "Y", "r", "")).await.unwrap();
        assert!(b.id > a.id);

        let titles: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_find_matches_substring_scenario() {
        let store = store().await;
        let engineer = store
            .insert(&new_experience("Engineer", "Acme", "Built APIs", "python,api"))
            .await
            .unwrap();
        store
            .insert(&new_experience("Barista", "Cafe", "Made coffee", "latte art"))
            .await
            .unwrap();

        let matches = store.find_matches(&skills(&["api", "cloud"])).await.unwrap();
        assert_eq!(matches, vec![engineer]);
    }

    #[tokio::test]
    async fn test_find_matches_empty_skills_returns_nothing() {
        let store = store().await;
        store.insert(&new_experience("Engineer", "Acme", "Built APIs", "python")).await.unwrap();
        store.insert(&new_experience("Blank", "Acme", "Nothing", "")).await.unwrap();

        assert!(store.find_matches(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_matches_is_case_sensitive() {
        let store = store().await;
        store.insert(&new_experience("Engineer", "Acme", "Built APIs", "Python")).await.unwrap();

        assert!(store.find_matches(&skills(&["python"])).await.unwrap().is_empty());
        assert_eq!(store.find_matches(&skills(&["Python"])).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_matches_returns_each_record_once() {
        let store = store().await;
        store
            .insert(&new_experience("Engineer", "Acme", "Built APIs", "python,api,aws"))
            .await
            .unwrap();

        let matches = store
            .find_matches(&skills(&["python", "api", "aws"]))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_find_matches_treats_like_wildcards_literally() {
        let store = store().await;
        store.insert(&new_experience("Engineer", "Acme", "Built APIs", "python")).await.unwrap();

        assert!(store.find_matches(&skills(&["%"])).await.unwrap().is_empty());
        assert!(store.find_matches(&skills(&["py_hon"])).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_matches_only_returns_records_containing_a_skill() {
        let store = store().await;
        for (title, tag) in [("A", "rust,sql"), ("B", "go"), ("C", "sqlite"), ("D", "")] {
            store.insert(&new_experience(title, "Co", "r", tag)).await.unwrap();
        }

        let wanted = skills(&["sql", "kotlin"]);
        let matches = store.find_matches(&wanted).await.unwrap();

        let titles: Vec<_> = matches.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert!(matches
            .iter()
            .all(|r| wanted.iter().any(|s| r.skills_tag.contains(s.as_str()))));
    }

    #[tokio::test]
    async fn test_insert_failure_is_returned() {
        let store = store().await;
        sqlx::query("DROP TABLE job_experience")
            .execute(&store.pool)
            .await
            .unwrap();

        let result = store
            .insert(&new_experience("Engineer", "Acme", "Built APIs", "api"))
            .await;
        assert!(result.is_err());
    }
}
