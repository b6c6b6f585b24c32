use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReceiptError;
use crate::domain::extraction::model::ReceiptExtraction;

/// Matches the width of the `name` column.
pub const MAX_NAME_LENGTH: usize = 100;

/// An uploaded receipt: the stored photo (by blob key) plus what was read off it.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub id: Uuid,
    pub name: String,
    pub key: String,
    pub data: ReceiptExtraction,
    pub timestamp: DateTime<Utc>,
}

pub struct NewReceiptProps {
    pub name: String,
    pub key: String,
    pub data: ReceiptExtraction,
}

impl Receipt {
    pub fn new(props: NewReceiptProps) -> Result<Self, ReceiptError> {
        let name = validate_name(&props.name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            key: props.key,
            data: props.data,
            timestamp: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        key: String,
        data: ReceiptExtraction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            key,
            data,
            timestamp,
        }
    }
}

/// Trims `name` and checks it is neither blank nor longer than
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(name: &str) -> Result<&str, ReceiptError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ReceiptError::NameEmpty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ReceiptError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(name)
}

/// Generates a blob key for a new upload: 32 lowercase hex characters.
pub fn new_image_key() -> String {
    Uuid::new_v4().simple().to_string()
}
