use derive_new::new;

use crate::model::id::PatronId;

#[derive(new, Debug)]
pub struct CreatePatron {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}

// 変更できるのは連絡先のみ
#[derive(new, Debug)]
pub struct UpdatePatron {
    pub patron_id: PatronId,
    pub email: String,
    pub address: String,
}

#[derive(new, Debug)]
pub struct DeactivatePatron {
    pub patron_id: PatronId,
}
