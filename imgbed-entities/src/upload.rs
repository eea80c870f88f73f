use strum::{AsRefStr, Display, EnumString};

/// Naming strategy applied by the server to uploaded files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NameType {
    #[default]
    Default,
    Index,
    Origin,
    Short,
}

/// Whether the server returns relative or absolute links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReturnFormat {
    #[default]
    Default,
    Full,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_type() {
        assert_eq!("origin".parse::<NameType>().unwrap(), NameType::Origin);
        assert_eq!("Short".parse::<NameType>().unwrap(), NameType::Short);
        assert_eq!(NameType::Index.to_string(), "index");
    }

    #[test]
    fn parse_return_format() {
        assert_eq!("full".parse::<ReturnFormat>().unwrap(), ReturnFormat::Full);
        assert_eq!(ReturnFormat::default().as_ref(), "default");
    }
}
