use crate::core::domain::Identifiable;
use crate::core::library::PublicationKind;
use crate::publications::domain::model::PublicationEntity;

pub mod model;

// Publication is the priced, stocked item a publisher puts out; books and
// newspapers embed a PublicationEntity and expose it through this trait.
pub trait Publication: Identifiable {
    fn publication(&self) -> &PublicationEntity;
    fn publication_mut(&mut self) -> &mut PublicationEntity;
    fn kind(&self) -> PublicationKind;

    fn title(&self) -> &str {
        self.publication().title.as_str()
    }

    fn price(&self) -> f64 {
        self.publication().price
    }

    fn stock(&self) -> i64 {
        self.publication().stock
    }

    fn publisher_id(&self) -> i64 {
        self.publication().publisher_id
    }
}
