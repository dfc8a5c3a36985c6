error_chain!{

    links {
        LolApi(crate::lol_api::Error, crate::lol_api::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        MissingApiKey {
            description("No riot api key was configured.")
            display("No riot api key found. Set RIOT_API_KEY or put the key in <working dir>/key.txt.")
        }

        InvalidSetting(name : &'static str, value : String) {
            description("A configuration variable has an invalid value.")
            display("Invalid value '{}' for {}.", value, name)
        }
    }
}
