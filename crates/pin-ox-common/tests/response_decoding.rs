#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use pin_ox_common::{ErrorKind, PinRequestError, decode_response};
    use reqwest::StatusCode;
    use serde_json::json;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).expect("valid status code")
    }

    fn body(bytes: &'static [u8]) -> Bytes {
        Bytes::from_static(bytes)
    }

    #[test]
    fn test_success_payload_returned_unmodified() {
        let value = decode_response(status(200), &body(br#"{"size": 3, "extra": [1, 2]}"#))
            .expect("success decodes");
        assert_eq!(value, json!({"size": 3, "extra": [1, 2]}));
    }

    #[test]
    fn test_no_content_yields_empty_result_regardless_of_body() {
        let value =
            decode_response(status(204), &body(b"this body is ignored")).expect("204 decodes");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_success_text_body_wrapped_as_message() {
        let value = decode_response(status(200), &body(b"pinned")).expect("text wraps");
        assert_eq!(value, json!({"message": "pinned"}));
    }

    #[test]
    fn test_message_field_used_for_error_message() {
        let err = decode_response(status(404), &body(br#"{"message": "boom", "detail": 1}"#))
            .err()
            .expect("404 errors");

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "boom");
        assert_eq!(err.status_code, Some(404));
        assert_eq!(err.response, Some(json!({"message": "boom", "detail": 1})));
    }

    #[test]
    fn test_unauthorized_and_bad_request_kinds() {
        let err = decode_response(status(401), &body(b"{}"))
            .err()
            .expect("401 errors");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.status_code, Some(401));

        let err = decode_response(status(400), &body(b"{}"))
            .err()
            .expect("400 errors");
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(err.status_code, Some(400));
    }

    #[test]
    fn test_server_kind_carries_exact_status() {
        for code in [500, 502, 503, 599] {
            let err = decode_response(status(code), &body(b"{}"))
                .err()
                .expect("5xx errors");
            assert_eq!(err.kind, ErrorKind::Server);
            assert_eq!(err.status_code, Some(code));
        }
    }

    #[test]
    fn test_server_error_with_text_body_uses_wrapped_message() {
        let err = decode_response(status(500), &body(b"oops"))
            .err()
            .expect("500 errors");

        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "oops");
        assert_eq!(err.status_code, Some(500));
        assert_eq!(err.response, Some(json!({"message": "oops"})));
    }

    #[test]
    fn test_other_status_maps_to_api_kind_with_synthesized_message() {
        let err = decode_response(status(402), &body(b"{}"))
            .err()
            .expect("402 errors");

        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.status_code, Some(402));
        assert_eq!(err.message, "HTTP Error 402: Payment Required");
    }

    #[test]
    fn test_non_object_error_payload_synthesizes_message() {
        let err = decode_response(status(400), &body(br#"["nope"]"#))
            .err()
            .expect("400 errors");

        assert_eq!(err.message, "HTTP Error 400: Bad Request");
        assert_eq!(err.response, Some(json!(["nope"])));
    }

    #[test]
    fn test_non_string_message_field_synthesizes_message() {
        let err = decode_response(status(400), &body(br#"{"message": 5}"#))
            .err()
            .expect("400 errors");

        assert_eq!(err.message, "HTTP Error 400: Bad Request");
    }

    #[test]
    fn test_retryability_by_kind() {
        assert!(PinRequestError::from_kind(ErrorKind::Server).is_retryable());
        assert!(PinRequestError::from_kind(ErrorKind::Timeout).is_retryable());
        assert!(PinRequestError::from_kind(ErrorKind::Transport).is_retryable());
        assert!(!PinRequestError::from_kind(ErrorKind::NotFound).is_retryable());
        assert!(!PinRequestError::from_kind(ErrorKind::Unauthorized).is_retryable());
        assert!(!PinRequestError::from_kind(ErrorKind::BadRequest).is_retryable());
    }

    #[test]
    fn test_default_messages_selected_by_kind() {
        assert_eq!(
            PinRequestError::from_kind(ErrorKind::Unauthorized).message,
            "Invalid or missing API key"
        );
        assert_eq!(
            PinRequestError::from_kind(ErrorKind::Timeout).message,
            "Request timed out"
        );
    }
}
