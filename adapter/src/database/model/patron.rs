use kernel::model::{id::PatronId, patron::Patron};

#[derive(sqlx::FromRow)]
pub struct PatronRow {
    pub patron_id: PatronId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub is_active: bool,
}

impl From<PatronRow> for Patron {
    fn from(value: PatronRow) -> Self {
        let PatronRow {
            patron_id,
            first_name,
            last_name,
            email,
            address,
            is_active,
        } = value;
        Patron {
            id: patron_id,
            first_name,
            last_name,
            email,
            address,
            is_active,
        }
    }
}
