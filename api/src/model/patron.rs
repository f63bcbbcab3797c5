use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::PatronId,
    patron::{
        event::{CreatePatron, UpdatePatron},
        Patron, PatronDetail,
    },
};
use serde::{Deserialize, Serialize};

use super::checkout::CheckoutResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatronRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub address: String,
}

impl From<CreatePatronRequest> for CreatePatron {
    fn from(value: CreatePatronRequest) -> Self {
        let CreatePatronRequest {
            first_name,
            last_name,
            email,
            address,
        } = value;
        CreatePatron::new(first_name, last_name, email, address)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatronRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub address: String,
}

#[derive(new)]
pub struct UpdatePatronRequestWithId(PatronId, UpdatePatronRequest);

impl From<UpdatePatronRequestWithId> for UpdatePatron {
    fn from(value: UpdatePatronRequestWithId) -> Self {
        let UpdatePatronRequestWithId(patron_id, UpdatePatronRequest { email, address }) = value;
        UpdatePatron::new(patron_id, email, address)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronResponse {
    pub id: PatronId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub is_active: bool,
}

impl From<Patron> for PatronResponse {
    fn from(value: Patron) -> Self {
        let Patron {
            id,
            first_name,
            last_name,
            email,
            address,
            is_active,
        } = value;
        Self {
            id,
            first_name,
            last_name,
            email,
            address,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronsResponse {
    pub items: Vec<PatronResponse>,
}

impl From<Vec<Patron>> for PatronsResponse {
    fn from(value: Vec<Patron>) -> Self {
        Self {
            items: value.into_iter().map(PatronResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronDetailResponse {
    #[serde(flatten)]
    pub patron: PatronResponse,
    pub checkouts: Vec<CheckoutResponse>,
}

impl PatronDetailResponse {
    pub fn new(detail: PatronDetail, today: NaiveDate) -> Self {
        let PatronDetail { patron, checkouts } = detail;
        Self {
            patron: patron.into(),
            checkouts: checkouts
                .into_iter()
                .map(|checkout| CheckoutResponse::new(checkout, today))
                .collect(),
        }
    }
}
