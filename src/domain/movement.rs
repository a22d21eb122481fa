use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{BankAccountId, ClientId};

/// Label used when a request does not name a movement type.
pub const DEFAULT_MOVEMENT_TYPE: &str = "TRANSFER";

/// A recorded financial movement between accounts and clients.
///
/// The relational fields are independently optional; an absent one is a
/// normal state, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub type_movement: String,
    pub amount: Decimal,
    pub balance: Decimal,
    pub is_reversible: bool,
    pub date: NaiveDateTime,
    pub transfer_deadline_date: Option<NaiveDateTime>,
    pub origin: Option<BankAccountId>,
    pub destination: Option<BankAccountId>,
    pub sender_client: Option<ClientId>,
    pub recipient_client: Option<ClientId>,
}

impl Movement {
    pub fn new(type_movement: impl Into<String>, amount: Decimal, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            type_movement: type_movement.into(),
            amount,
            balance,
            is_reversible: false,
            date: Local::now().naive_local(),
            transfer_deadline_date: None,
            origin: None,
            destination: None,
            sender_client: None,
            recipient_client: None,
        }
    }

    /// Builds a movement from an incoming request.
    ///
    /// `balance` is the origin account balance after the movement. A
    /// `deadline` marks the movement reversible until that moment.
    pub fn from_request(
        request: &MovementRequest,
        balance: Decimal,
        sender_client: Option<ClientId>,
        deadline: Option<NaiveDateTime>,
    ) -> Self {
        let type_movement = request
            .type_movement
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_MOVEMENT_TYPE);
        let mut movement = Self::new(type_movement, request.amount, balance);
        movement.origin = non_blank(&request.bank_account_origin).map(BankAccountId::new);
        movement.destination =
            non_blank(&request.bank_account_destination).map(BankAccountId::new);
        movement.recipient_client = non_blank(&request.client_recipient_id).map(ClientId::new);
        movement.sender_client = sender_client;
        if let Some(deadline) = deadline {
            movement = movement.reversible_until(deadline);
        }
        movement
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    pub fn with_origin(mut self, origin: BankAccountId) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_destination(mut self, destination: BankAccountId) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn with_sender(mut self, sender: ClientId) -> Self {
        self.sender_client = Some(sender);
        self
    }

    pub fn with_recipient(mut self, recipient: ClientId) -> Self {
        self.recipient_client = Some(recipient);
        self
    }

    pub fn reversible_until(mut self, deadline: NaiveDateTime) -> Self {
        self.is_reversible = true;
        self.transfer_deadline_date = Some(deadline);
        self
    }
}

/// Incoming request to create a movement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRequest {
    #[serde(default)]
    pub bank_account_origin: Option<String>,
    #[serde(default)]
    pub client_recipient_id: Option<String>,
    #[serde(default)]
    pub bank_account_destination: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub type_movement: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_movement_has_no_relations() {
        let movement = Movement::new("TRANSFER", Decimal::new(10000, 2), Decimal::new(90000, 2));
        assert!(!movement.id.is_empty());
        assert!(!movement.is_reversible);
        assert!(movement.origin.is_none());
        assert!(movement.recipient_client.is_none());
        assert!(movement.transfer_deadline_date.is_none());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let movement = Movement::new("TRANSFER", Decimal::new(5, 0), Decimal::new(95, 0))
            .with_id("mv-1")
            .with_date(at(1, 9))
            .with_origin(BankAccountId::new("ES01"));
        let json = serde_json::to_value(&movement).unwrap();
        for key in [
            "id",
            "typeMovement",
            "amount",
            "balance",
            "isReversible",
            "date",
            "transferDeadlineDate",
            "origin",
            "destination",
            "senderClient",
            "recipientClient",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["origin"], "ES01");
        assert!(json["destination"].is_null());
    }

    #[test]
    fn from_request_maps_parties_and_deadline() {
        let request = MovementRequest {
            bank_account_origin: Some("ES01".into()),
            client_recipient_id: Some("  ".into()),
            bank_account_destination: Some("ES02".into()),
            amount: Decimal::new(2500, 2),
            type_movement: None,
        };
        let movement = Movement::from_request(
            &request,
            Decimal::new(97500, 2),
            Some(ClientId::new("client-1")),
            Some(at(8, 12)),
        );
        assert_eq!(movement.type_movement, DEFAULT_MOVEMENT_TYPE);
        assert_eq!(movement.origin, Some(BankAccountId::new("ES01")));
        assert_eq!(movement.destination, Some(BankAccountId::new("ES02")));
        assert!(movement.recipient_client.is_none());
        assert_eq!(movement.sender_client, Some(ClientId::new("client-1")));
        assert!(movement.is_reversible);
        assert_eq!(movement.transfer_deadline_date, Some(at(8, 12)));
    }

    #[test]
    fn deserializes_request_with_missing_optionals() {
        let request: MovementRequest =
            serde_json::from_str(r#"{"amount":"12.50","typeMovement":"DEPOSIT"}"#).unwrap();
        assert_eq!(request.amount, Decimal::new(1250, 2));
        assert_eq!(request.type_movement.as_deref(), Some("DEPOSIT"));
        assert!(request.bank_account_origin.is_none());
    }
}
