use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(pub u32);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Electrician,
    Plumber,
    Cleaner,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Electrician => "Electrician",
            Role::Plumber => "Plumber",
            Role::Cleaner => "Cleaner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrows the visible vendor list. Defaults to showing everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(self, vendor: &Vendor) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(role) => vendor.role == role,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::All => "All",
            RoleFilter::Only(role) => role.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub role: Role,
    pub phone_number: String,
}

impl Vendor {
    pub fn new(id: u32, name: &str, role: Role, phone_number: &str) -> Self {
        Self {
            id: VendorId(id),
            name: name.to_string(),
            role,
            phone_number: phone_number.to_string(),
        }
    }
}

/// Immutable list of vendors the dashboard works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDirectory {
    vendors: Vec<Vendor>,
}

static SEED: Lazy<VendorDirectory> = Lazy::new(|| {
    use Role::*;
    VendorDirectory::new(vec![
        Vendor::new(1, "John Doe", Electrician, "+1234567890"),
        Vendor::new(2, "Jane Smith", Plumber, "+1987654321"),
        Vendor::new(3, "Bob Johnson", Cleaner, "+1122334455"),
        Vendor::new(4, "Alice Williams", Electrician, "+1555666777"),
        Vendor::new(5, "David Brown", Plumber, "+1444555666"),
        Vendor::new(6, "Emily Davis", Cleaner, "+1333444555"),
        Vendor::new(7, "Michael Wilson", Electrician, "+1222333444"),
        Vendor::new(8, "Sarah Miller", Plumber, "+1111222333"),
        Vendor::new(9, "Chris Evans", Cleaner, "+1000111222"),
        Vendor::new(10, "Jessica Green", Electrician, "+1999888777"),
        Vendor::new(11, "Daniel White", Plumber, "+1888777666"),
        Vendor::new(12, "Olivia Harris", Cleaner, "+1777666555"),
        Vendor::new(13, "James Clark", Electrician, "+1666555444"),
        Vendor::new(14, "Sophia Lewis", Plumber, "+1555444333"),
        Vendor::new(15, "Robert King", Cleaner, "+1444333222"),
        Vendor::new(16, "Maria Scott", Electrician, "+1333222111"),
        Vendor::new(17, "Kevin Baker", Plumber, "+1222111000"),
        Vendor::new(18, "Laura Adams", Cleaner, "+1111000999"),
        Vendor::new(19, "Paul Nelson", Electrician, "+1000999888"),
        Vendor::new(20, "Nicole Carter", Plumber, "+1999888777"),
    ])
});

impl VendorDirectory {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// The built-in list of twenty vendors.
    pub fn seeded() -> Self {
        SEED.clone()
    }

    pub fn all(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn get(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: VendorId) -> bool {
        self.get(id).is_some()
    }

    pub fn visible(&self, filter: RoleFilter) -> Vec<&Vendor> {
        self.vendors.iter().filter(|v| filter.matches(v)).collect()
    }

    /// Distinct roles in order of first appearance.
    pub fn roles(&self) -> Vec<Role> {
        let mut out = Vec::new();
        for v in &self.vendors {
            if !out.contains(&v.role) {
                out.push(v.role);
            }
        }
        out
    }

    /// `All` followed by one filter per role present in the directory.
    pub fn filters(&self) -> Vec<RoleFilter> {
        std::iter::once(RoleFilter::All)
            .chain(self.roles().into_iter().map(RoleFilter::Only))
            .collect()
    }
}

// Wire format of the generateContent endpoint. Response fields are all
// optional so a partial payload degrades to "no text" instead of a parse error.

/// Absent and `null` lists both read as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    pub system_instruction: Content,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: serde_json::Map<String, serde_json::Value>,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}
