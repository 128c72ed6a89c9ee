use crate::domain::entities::BidRecord;
use crate::domain::errors::SerializationError;
use crate::ports::outbound::LedgerSerializer;

/// Ledger serializer writing a single JSON array of records.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLedgerSerializer;

impl LedgerSerializer for JsonLedgerSerializer {
    fn serialize(&self, records: &[BidRecord]) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(records).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<Vec<BidRecord>, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
