//! Record ids as stored in MongoDB.
//!
//! Ids are kept as BSON binary subtype 4 on every path: document fields,
//! query filters and `$set` values. Document structs hold
//! [`mongodb::bson::Uuid`] so the raw serializer used by the driver and
//! `to_bson` agree on the encoding.

use mongodb::bson::Uuid as BsonUuid;
use uuid::Uuid;

pub fn bson_uuid(id: Uuid) -> BsonUuid {
    BsonUuid::from_bytes(id.into_bytes())
}

pub fn uuid_from_bson(id: BsonUuid) -> Uuid {
    Uuid::from_bytes(id.bytes())
}

pub fn bson_uuids(ids: &[Uuid]) -> Vec<BsonUuid> {
    ids.iter().copied().map(bson_uuid).collect()
}

pub fn uuids_from_bson(ids: Vec<BsonUuid>) -> Vec<Uuid> {
    ids.into_iter().map(uuid_from_bson).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Bson, doc, spec::BinarySubtype, to_bson, to_raw_document_buf};

    #[test]
    fn test_round_trip_keeps_id() {
        let id = Uuid::now_v7();
        assert_eq!(uuid_from_bson(bson_uuid(id)), id);
        assert_eq!(uuids_from_bson(bson_uuids(&[id, id])), vec![id, id]);
    }

    #[test]
    fn test_filter_and_stored_encoding_agree() {
        let id = bson_uuid(Uuid::now_v7());

        let stored = to_raw_document_buf(&doc! { "_id": id })
            .unwrap()
            .to_document()
            .unwrap();
        let via_serde = to_bson(&id).unwrap();
        let via_from = Bson::from(id);

        assert_eq!(stored.get("_id"), Some(&via_from));
        assert_eq!(via_serde, via_from);
        match via_from {
            Bson::Binary(binary) => assert_eq!(binary.subtype, BinarySubtype::Uuid),
            other => panic!("expected binary, got {other:?}"),
        }
    }
}
