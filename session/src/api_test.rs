use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:3000/", LOGIN_PATH), "http://localhost:3000/auth/login");
    assert_eq!(endpoint("http://localhost:3000", REGISTER_PATH), "http://localhost:3000/auth/register");
}

#[test]
fn endpoint_trims_whitespace_around_base() {
    assert_eq!(endpoint(" https://api.example.com/v1// ", LOGIN_PATH), "https://api.example.com/v1/auth/login");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn from_status_extracts_string_message() {
    let err = ApiError::from_status(401, r#"{"statusCode":401,"message":"Unauthorized"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Unauthorized".to_owned()
        }
    );
}

#[test]
fn from_status_joins_array_messages() {
    let err = ApiError::from_status(400, r#"{"message":["email must be an email","pass is too short"]}"#);
    assert_eq!(err.to_string(), "server returned 400: email must be an email; pass is too short");
}

#[test]
fn from_status_keeps_plain_text_body() {
    let err = ApiError::from_status(502, "  Bad Gateway \n");
    assert_eq!(err.to_string(), "server returned 502: Bad Gateway");
}

#[test]
fn from_status_handles_empty_body() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err.to_string(), "server returned 500: no response body");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(403, "").is_unauthorized());
    assert!(!ApiError::from_status(500, "").is_unauthorized());
    assert!(!ApiError::Transport("offline".to_owned()).is_unauthorized());
}

#[test]
fn rejected_covers_conflict_and_validation_statuses() {
    assert!(ApiError::from_status(409, "").is_rejected());
    assert!(ApiError::from_status(400, "").is_rejected());
    assert!(!ApiError::from_status(401, "").is_rejected());
}
