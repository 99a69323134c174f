//! The closed set of FHIR resource types the gateway serves.
//!
//! Each supported resource maps a URL path segment to the FHIR type used
//! upstream and the key under which the projected array is returned. The
//! set is closed on purpose: an unknown segment is a 404, never a
//! pass-through to the FHIR server.

/// One servable FHIR resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedResource {
    Procedures,
    FamilyMemberHistory,
    Conditions,
    Observations,
    MedicationRequests,
    AllergyIntolerances,
    Immunizations,
}

impl SupportedResource {
    /// All supported resources, in route order.
    pub const ALL: [Self; 7] = [
        Self::Procedures,
        Self::FamilyMemberHistory,
        Self::Conditions,
        Self::Observations,
        Self::MedicationRequests,
        Self::AllergyIntolerances,
        Self::Immunizations,
    ];

    /// Resolves a URL path segment, e.g. `medication-requests`.
    #[must_use]
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "procedures" => Some(Self::Procedures),
            "family-member-history" => Some(Self::FamilyMemberHistory),
            "conditions" => Some(Self::Conditions),
            "observations" => Some(Self::Observations),
            "medication-requests" => Some(Self::MedicationRequests),
            "allergy-intolerances" => Some(Self::AllergyIntolerances),
            "immunizations" => Some(Self::Immunizations),
            _ => None,
        }
    }

    /// The URL path segment this resource is served under.
    #[must_use]
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Procedures => "procedures",
            Self::FamilyMemberHistory => "family-member-history",
            Self::Conditions => "conditions",
            Self::Observations => "observations",
            Self::MedicationRequests => "medication-requests",
            Self::AllergyIntolerances => "allergy-intolerances",
            Self::Immunizations => "immunizations",
        }
    }

    /// The FHIR resource type requested upstream.
    #[must_use]
    pub fn fhir_type(&self) -> &'static str {
        match self {
            Self::Procedures => "Procedure",
            Self::FamilyMemberHistory => "FamilyMemberHistory",
            Self::Conditions => "Condition",
            Self::Observations => "Observation",
            Self::MedicationRequests => "MedicationRequest",
            Self::AllergyIntolerances => "AllergyIntolerance",
            Self::Immunizations => "Immunization",
        }
    }

    /// The key the projected resource array is returned under.
    #[must_use]
    pub fn response_key(&self) -> &'static str {
        match self {
            Self::Procedures => "procedures",
            Self::FamilyMemberHistory => "familyMemberHistory",
            Self::Conditions => "conditions",
            Self::Observations => "observations",
            Self::MedicationRequests => "medicationRequests",
            Self::AllergyIntolerances => "allergyIntolerances",
            Self::Immunizations => "immunizations",
        }
    }
}
