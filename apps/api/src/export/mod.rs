// Export layout: turns an edited resume into a page plan for PDF or a paragraph
// plan for Word. Producing the document bytes is left to the presentation shell.

pub mod flatten;
pub mod handlers;
pub mod layout;
