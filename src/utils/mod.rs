use base64::{Engine as _, engine::general_purpose};

pub fn encode_bytes_to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_bytes_without_prefix() {
        assert_eq!(encode_bytes_to_base64(b"hello"), "aGVsbG8=");
    }
}
