use crate::publications::domain::Publication;

pub mod model;

pub trait Book: Publication {
    fn isbn(&self) -> &str;
    fn page_count(&self) -> i64;
    fn author_ids(&self) -> &[i64];
    fn category_id(&self) -> i64;

    fn is_written_by(&self, author_id: i64) -> bool {
        self.author_ids().contains(&author_id)
    }
}
