//! Hard-coded mock catalog. There is no backend; every page renders from
//! these records.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Emergency {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub urgency: Urgency,
    pub supplied: u32,
    pub needed: u32,
    pub deadline: &'static str,
}

#[derive(Clone, Debug)]
pub struct AssistanceOffer {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub supported: u32,
    pub needed: u32,
}

#[derive(Clone, Debug)]
pub struct CommunityEvent {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub date: &'static str,
    pub attendees: u32,
}

pub fn emergencies() -> Vec<Emergency> {
    vec![
        Emergency {
            id: 1,
            title: "Food Bank",
            description: "Local food distribution center needs supplies",
            location: "Downtown",
            urgency: Urgency::High,
            supplied: 30,
            needed: 100,
            deadline: "2024-02-01",
        },
        Emergency {
            id: 2,
            title: "Community Garden",
            description: "Seeds and tools needed for spring planting",
            location: "Westside",
            urgency: Urgency::Medium,
            supplied: 45,
            needed: 80,
            deadline: "2024-02-15",
        },
        Emergency {
            id: 3,
            title: "Tool Library",
            description: "Construction tools needed for rebuilding",
            location: "Eastside",
            urgency: Urgency::High,
            supplied: 15,
            needed: 50,
            deadline: "2024-01-30",
        },
    ]
}

pub fn assistance_offers() -> Vec<AssistanceOffer> {
    vec![
        AssistanceOffer {
            id: 1,
            title: "Legal Aid",
            description: "Free legal consultation",
            location: "City Center",
            lat: 40.7528,
            lng: -74.026,
            supported: 0,
            needed: 100,
        },
        AssistanceOffer {
            id: 2,
            title: "Housing Assistance",
            description: "Help finding affordable housing",
            location: "Northside",
            lat: 40.7628,
            lng: -74.036,
            supported: 0,
            needed: 100,
        },
        AssistanceOffer {
            id: 3,
            title: "Financial Counseling",
            description: "Budget and debt advice",
            location: "Southside",
            lat: 40.7028,
            lng: -73.986,
            supported: 0,
            needed: 100,
        },
    ]
}

pub fn community_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: 1,
            title: "Community Cleanup",
            description: "Volunteer event to clean local park",
            location: "Central Park",
            lat: 40.7828,
            lng: -73.966,
            date: "2024-03-25",
            attendees: 15,
        },
        CommunityEvent {
            id: 2,
            title: "Farmers Market",
            description: "Weekly local produce market",
            location: "Market Square",
            lat: 40.7428,
            lng: -73.976,
            date: "2024-03-25",
            attendees: 15,
        },
        CommunityEvent {
            id: 3,
            title: "Workshop Series",
            description: "DIY repair workshops",
            location: "Community Center",
            lat: 40.7328,
            lng: -74.046,
            date: "2024-03-25",
            attendees: 15,
        },
    ]
}

#[derive(Clone, Debug)]
pub struct VolunteerTask {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Clone, Debug)]
pub struct VolunteerOpportunity {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub tasks: Vec<VolunteerTask>,
    pub requirements: Vec<&'static str>,
}

pub fn volunteer_opportunity(id: u32) -> Option<VolunteerOpportunity> {
    if id == 0 {
        return None;
    }
    Some(VolunteerOpportunity {
        id,
        title: "Food Distribution Center",
        location: "City Park",
        date: "2024-04-01",
        time: "9:00 AM - 12:00 PM",
        description: "Help us distribute food packages for families in need. We need \
                      volunteers to sort, package, and hand out food items to community \
                      members.",
        tasks: vec![
            VolunteerTask { id: 1, name: "Sort and organize donated items" },
            VolunteerTask { id: 2, name: "Pack boxes with food and supplies" },
            VolunteerTask { id: 3, name: "Help load packages into vehicles" },
            VolunteerTask { id: 4, name: "Track inventory and maintain database" },
        ],
        requirements: vec![
            "Must be at least 18 years old",
            "Able to lift up to 25 pounds",
            "Valid photo ID for verification",
        ],
    })
}

#[derive(Clone, Debug)]
pub struct AssistanceService {
    pub id: u32,
    pub name: &'static str,
    pub available: bool,
}

#[derive(Clone, Debug)]
pub struct AssistanceDetail {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub services: Vec<AssistanceService>,
    pub eligibility: Vec<&'static str>,
}

pub fn assistance_detail(id: u32) -> Option<AssistanceDetail> {
    if id == 0 {
        return None;
    }
    Some(AssistanceDetail {
        id,
        title: "Legal Aid Services",
        location: "Community Center",
        date: "2024-04-15",
        time: "10:00 AM - 4:00 PM",
        description: "Free legal consultation services for community members. Our \
                      volunteer attorneys provide guidance on various legal matters \
                      including housing, employment, and family law.",
        services: vec![
            AssistanceService { id: 1, name: "Housing Rights Consultation", available: true },
            AssistanceService { id: 2, name: "Employment Law Advice", available: true },
            AssistanceService { id: 3, name: "Family Law Guidance", available: true },
            AssistanceService { id: 4, name: "Immigration Consultation", available: false },
        ],
        eligibility: vec![
            "Open to all community members",
            "Priority given to low-income individuals",
            "Bring identification and relevant documents",
        ],
    })
}

#[derive(Clone, Debug)]
pub struct DonationItem {
    pub id: u32,
    pub name: &'static str,
    pub needed: u32,
    pub urgent: bool,
}

#[derive(Clone, Debug)]
pub struct DonationTarget {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub deadline: &'static str,
    pub items: Vec<DonationItem>,
}

pub fn donation_target(id: u32) -> Option<DonationTarget> {
    if id == 0 {
        return None;
    }
    Some(DonationTarget {
        id,
        title: "Food Bank",
        location: "City Park",
        deadline: "2024-04-01",
        items: vec![
            DonationItem { id: 1, name: "Bottled Water", needed: 50, urgent: true },
            DonationItem { id: 2, name: "Canned Food", needed: 100, urgent: true },
            DonationItem { id: 3, name: "Blankets", needed: 30, urgent: false },
        ],
    })
}

#[derive(Clone, Debug)]
pub struct AttendedEvent {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: &'static str,
}

#[derive(Clone, Debug)]
pub struct DonatedItem {
    pub name: &'static str,
    pub quantity: u32,
}

#[derive(Clone, Debug)]
pub struct PendingDonation {
    pub id: u32,
    pub organization: &'static str,
    pub items: Vec<DonatedItem>,
    pub status: &'static str,
    pub delivery_date: &'static str,
    pub delivery_time: &'static str,
}

#[derive(Clone, Debug)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub events: Vec<AttendedEvent>,
    pub donations: Vec<PendingDonation>,
}

impl UserProfile {
    /// "Alex Johnson" -> "AJ", for the avatar circle.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub fn user_profile() -> UserProfile {
    let attended = |id| AttendedEvent {
        id,
        title: "Community Fundraiser",
        location: "City Park (2.5 miles away)",
        date: "March 25, 2024",
        time: "4:00 PM - 8:00 PM",
        status: "Attending",
    };
    let donation_items = || {
        vec![
            DonatedItem { name: "Bottled Water", quantity: 24 },
            DonatedItem { name: "Blankets", quantity: 12 },
            DonatedItem { name: "Canned Food", quantity: 20 },
        ]
    };
    UserProfile {
        name: "Alex Johnson",
        email: "alex.johnson@example.com",
        phone: "(555) 123-4567",
        events: vec![attended(1), attended(2), attended(3)],
        donations: vec![
            PendingDonation {
                id: 1,
                organization: "Community Center",
                items: donation_items(),
                status: "Done",
                delivery_date: "Today",
                delivery_time: "10:00 AM - 12:00 PM",
            },
            PendingDonation {
                id: 2,
                organization: "Community Center",
                items: donation_items(),
                status: "Incoming",
                delivery_date: "Today",
                delivery_time: "10:00 AM - 12:00 PM",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_populated() {
        assert_eq!(emergencies().len(), 3);
        assert_eq!(assistance_offers().len(), 3);
        assert_eq!(community_events().len(), 3);
    }

    #[test]
    fn detail_lookups_handle_unknown_ids() {
        assert!(volunteer_opportunity(1).is_some());
        assert!(volunteer_opportunity(0).is_none());
        assert!(assistance_detail(0).is_none());
        assert!(donation_target(0).is_none());
    }

    #[test]
    fn profile_initials() {
        assert_eq!(user_profile().initials(), "AJ");
    }
}
