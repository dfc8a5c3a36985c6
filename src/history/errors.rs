error_chain!{

    links {
        LolApi(crate::lol_api::Error, crate::lol_api::ErrorKind);
    }

    foreign_links {
        Template(::askama::Error);
    }

    errors {
        NoRecentMatches {
            description("Player has no recent matches.")
            display("No recent matches found for this player.")
        }

        ParticipantNotFound(match_id : String) {
            description("Player is not a participant of the match.")
            display("Player not found in match {}", match_id)
        }
    }
}

impl Error {

    /// The text shown on the page in place of the failed piece of output.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::LolApi(kind) => kind.user_message(),
            ErrorKind::NoRecentMatches
            | ErrorKind::ParticipantNotFound(_) => self.to_string(),
            _ => crate::lol_api::UNEXPECTED_ERROR.to_string(),
        }
    }
}
