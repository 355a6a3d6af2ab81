//! JSON snapshot codec.

use jobengine_core::domain::StoreState;
use jobengine_core::ports::{CodecError, SnapshotCodec};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotCodec;

impl SnapshotCodec for JsonSnapshotCodec {
    fn encode(&self, state: &StoreState) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(state).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<StoreState, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobengine_core::domain::{Job, Queue};

    #[test]
    fn test_decode_keeps_job_order_and_payload() {
        let mut queue = Queue::new("orders", "hash");
        let mut first = Job::new("j2", 50).with_content(serde_json::json!({"sku": 7}));
        first.last_updated = 10;
        let mut second = Job::new("j1", 10);
        second.last_updated = 20;
        queue.push(first);
        queue.push(second);
        let mut state = StoreState::default();
        state.queues.insert("orders".into(), queue);

        let bytes = JsonSnapshotCodec.encode(&state).unwrap();
        let decoded = JsonSnapshotCodec.decode(&bytes).unwrap();

        assert_eq!(decoded, state);
        let uids: Vec<_> = decoded.queues["orders"].jobs.iter().map(|j| j.uid.clone()).collect();
        assert_eq!(uids, vec!["j2", "j1"]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            JsonSnapshotCodec.decode(b"\x00\x01"),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_accepts_missing_payload() {
        let bytes = br#"{"queues":{"q":{"name":"q","access_key":"h","size":1,"jobs":[
            {"uid":"a","state":"queued","priority":1,"last_updated":5,
             "keep_minutes":0,"timeout_minutes":0,"timeout_time":9}]}}}"#;
        let state = JsonSnapshotCodec.decode(bytes).unwrap();
        assert_eq!(state.queues["q"].jobs[0].content, serde_json::Value::Null);
    }
}
