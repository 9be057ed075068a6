use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref NODE_TYPE_LOOKUP: HashMap<&'static str, NodeType> = {
        let mut map = HashMap::new();
        map.insert("isize", NodeType::ISize);
        map.insert("usize", NodeType::USize);
        map.insert("i8", NodeType::I8);
        map.insert("i32", NodeType::I32);
        map.insert("i64", NodeType::I64);
        map.insert("u8", NodeType::U8);
        map.insert("u32", NodeType::U32);
        map.insert("u64", NodeType::U64);
        map.insert("f32", NodeType::F32);
        map.insert("f64", NodeType::F64);
        map.insert("decimal32", NodeType::Decimal32);
        map.insert("decimal64", NodeType::Decimal64);
        map.insert("dateTime", NodeType::DateTime);
        map.insert("time", NodeType::Time);
        map.insert("date", NodeType::Date);
        map.insert("duration", NodeType::Duration);
        map.insert("decimal", NodeType::Decimal);
        map.insert("currency", NodeType::Currency);
        map.insert("country2", NodeType::Country2);
        map.insert("country3", NodeType::Country3);
        map.insert("countrySubdivision", NodeType::CountrySubdivision);
        map.insert("email", NodeType::Email);
        map.insert("idnEmail", NodeType::IdnEmail);
        map.insert("hostname", NodeType::Hostname);
        map.insert("idnHostname", NodeType::IdnHostname);
        map.insert("ipv4", NodeType::Ipv4);
        map.insert("ipv6", NodeType::Ipv6);
        map.insert("url", NodeType::Url);
        map.insert("urlReference", NodeType::UrlReference);
        map.insert("irl", NodeType::Irl);
        map.insert("irlReference", NodeType::IrlReference);
        map.insert("urlTemplate", NodeType::UrlTemplate);
        map.insert("uuid", NodeType::Uuid);
        map.insert("regex", NodeType::Regex);
        map.insert("base64", NodeType::Base64);
        map
    };
}

/// The closed set of type annotations a node or entry may carry. Spelling in
/// source must match the canonical form exactly; there is no fallback.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeType {
    ISize,
    USize,
    I8,
    I32,
    I64,
    U8,
    U32,
    U64,

    F32,
    F64,
    Decimal32,
    Decimal64,

    DateTime,
    Time,
    Date,
    Duration,
    Decimal,
    Currency,

    Country2,
    Country3,
    CountrySubdivision,

    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,

    Url,
    UrlReference,
    Irl,
    IrlReference,
    UrlTemplate,

    Uuid,
    Regex,
    Base64,
}

impl NodeType {
    /// Resolves an annotation identifier against the closed type set.
    pub fn from_ident(ident: &str) -> Option<NodeType> {
        NODE_TYPE_LOOKUP.get(ident).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::ISize => "isize",
            NodeType::USize => "usize",
            NodeType::I8 => "i8",
            NodeType::I32 => "i32",
            NodeType::I64 => "i64",
            NodeType::U8 => "u8",
            NodeType::U32 => "u32",
            NodeType::U64 => "u64",
            NodeType::F32 => "f32",
            NodeType::F64 => "f64",
            NodeType::Decimal32 => "decimal32",
            NodeType::Decimal64 => "decimal64",
            NodeType::DateTime => "dateTime",
            NodeType::Time => "time",
            NodeType::Date => "date",
            NodeType::Duration => "duration",
            NodeType::Decimal => "decimal",
            NodeType::Currency => "currency",
            NodeType::Country2 => "country2",
            NodeType::Country3 => "country3",
            NodeType::CountrySubdivision => "countrySubdivision",
            NodeType::Email => "email",
            NodeType::IdnEmail => "idnEmail",
            NodeType::Hostname => "hostname",
            NodeType::IdnHostname => "idnHostname",
            NodeType::Ipv4 => "ipv4",
            NodeType::Ipv6 => "ipv6",
            NodeType::Url => "url",
            NodeType::UrlReference => "urlReference",
            NodeType::Irl => "irl",
            NodeType::IrlReference => "irlReference",
            NodeType::UrlTemplate => "urlTemplate",
            NodeType::Uuid => "uuid",
            NodeType::Regex => "regex",
            NodeType::Base64 => "base64",
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
