use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Notice returned after a successful create or edit
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct SaveResponse {
    /// Id of the saved record
    pub id: i32,

    /// Notice shown to the user
    pub message: String,

    /// Listing the client should navigate to
    pub redirect_to: String,
}

/// One entry of a dropdown list
#[derive(Object, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: i32,
    pub text: String,
}
