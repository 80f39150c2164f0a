/// Closed amenity vocabulary. Documents store plain string tags; anything
/// outside this set is kept by the store but has no display entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Wifi,
    Gym,
    Security,
    Parking,
    Pool,
    Garden,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::Wifi,
        Amenity::Gym,
        Amenity::Security,
        Amenity::Parking,
        Amenity::Pool,
        Amenity::Garden,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|amenity| amenity.tag() == tag)
    }

    /// Value stored on documents
    pub fn tag(self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Gym => "gym",
            Amenity::Security => "security",
            Amenity::Parking => "parking",
            Amenity::Pool => "pool",
            Amenity::Garden => "garden",
        }
    }

    /// Label shown on the detail page
    pub fn title(self) -> &'static str {
        match self {
            Amenity::Wifi => "High-Speed Internet",
            Amenity::Gym => "Fitness Center",
            Amenity::Security => "24/7 Security",
            Amenity::Parking => "Parking Garage",
            Amenity::Pool => "Pool",
            Amenity::Garden => "Garden Terrace",
        }
    }

    /// Label shown in the studio's option list
    pub fn option_title(self) -> &'static str {
        match self {
            Amenity::Wifi => "Wi-Fi",
            Amenity::Gym => "Gym",
            Amenity::Security => "Security",
            Amenity::Parking => "Parking",
            Amenity::Pool => "Pool",
            Amenity::Garden => "Garden",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Gym => "dumbbell",
            Amenity::Security => "shield",
            Amenity::Parking => "car",
            Amenity::Pool => "waves",
            Amenity::Garden => "tree-pine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_resolves_to_itself() {
        for amenity in Amenity::ALL {
            assert_eq!(Amenity::from_tag(amenity.tag()), Some(amenity));
        }
    }

    #[test]
    fn unknown_tag_has_no_entry() {
        assert_eq!(Amenity::from_tag("laser-tag"), None);
        assert_eq!(Amenity::from_tag("WIFI"), None);
    }
}
