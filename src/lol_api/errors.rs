error_chain!{

    foreign_links {
        Reqwest(::reqwest::Error);
        InvalidHeader(::reqwest::header::InvalidHeaderValue);
        Json(::serde_json::Error);
    }

    errors {
        UpstreamStatus(status : ::reqwest::StatusCode) {
            description("Upstream responded with a non-success status.")
            display("Error {}", status.as_u16())
        }

        InvalidRiotId(identifier : String) {
            description("Player identifier is not of the form Name#Tag.")
            display("Invalid format: expected Name#Tag, got '{}'", identifier)
        }

        UnknownReference(table : &'static str, id : i64) {
            description("Id is missing from a static reference table.")
            display("No {} with id {} in the reference data.", table, id)
        }
    }
}

/// Text shown in place of anything we don't have a friendlier message for.
pub const UNEXPECTED_ERROR : &str = "An unexpected error occurred";

impl ErrorKind {

    /// Converts the error into the text embedded in the page.
    /// Transport, parse and other internal failures collapse to
    /// a generic message so upstream bodies never leak to users.
    pub fn user_message(&self) -> String {
        match self {
            ErrorKind::UpstreamStatus(_)
            | ErrorKind::InvalidRiotId(_) => self.to_string(),
            _ => UNEXPECTED_ERROR.to_string(),
        }
    }
}

impl Error {

    /// The upstream status code, if this error came from a
    /// non-success response.
    pub fn upstream_status(&self) -> Option<::reqwest::StatusCode> {
        match self.kind() {
            ErrorKind::UpstreamStatus(status) => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.kind().user_message()
    }
}
