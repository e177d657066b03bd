// Core household domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::invite::InviteCode;

/// Longest house name accepted by the create form
pub const MAX_HOUSE_NAME_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoreId(pub Uuid);

impl ChoreId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChoreId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub points: u32,
}

impl User {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            points,
        }
    }

    /// First letters of up to two space-separated name tokens, uppercased
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter(|token| !token.is_empty())
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Urgency tag shown next to a chore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DueLabel {
    #[default]
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    Overdue,
}

impl DueLabel {
    pub const ALL: [DueLabel; 5] = [
        DueLabel::Today,
        DueLabel::Tomorrow,
        DueLabel::ThisWeek,
        DueLabel::NextWeek,
        DueLabel::Overdue,
    ];

    /// Labels offered when creating a chore (nothing starts out overdue)
    pub const SELECTABLE: [DueLabel; 4] = [
        DueLabel::Today,
        DueLabel::Tomorrow,
        DueLabel::ThisWeek,
        DueLabel::NextWeek,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This week",
            Self::NextWeek => "Next week",
            Self::Overdue => "Overdue",
        }
    }

    pub fn is_due_today(self) -> bool {
        matches!(self, Self::Today | Self::Overdue)
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DueLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|due| due.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub title: String,
    pub description: String,
    pub assignee: UserId,
    pub due: DueLabel,
    pub is_done: bool,
}

impl Chore {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: UserId,
        due: DueLabel,
    ) -> Self {
        Self {
            id: ChoreId::new(),
            title: title.into(),
            description: description.into(),
            assignee,
            due,
            is_done: false,
        }
    }

    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }
}

/// Input for a chore created from the new-chore form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub title: String,
    pub description: String,
    pub assignee: UserId,
    pub due: DueLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseType {
    #[default]
    StudentHouse,
    SharedHouse,
    DormRoom,
}

impl HouseType {
    pub const ALL: [HouseType; 3] = [
        HouseType::StudentHouse,
        HouseType::SharedHouse,
        HouseType::DormRoom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentHouse => "Student House",
            Self::SharedHouse => "Shared House",
            Self::DormRoom => "Dorm Room",
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::StudentHouse,
            1 => Self::SharedHouse,
            2 => Self::DormRoom,
            _ => Self::StudentHouse,
        }
    }

    pub fn to_index(self) -> usize {
        match self {
            Self::StudentHouse => 0,
            Self::SharedHouse => 1,
            Self::DormRoom => 2,
        }
    }
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HouseType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label '{0}'")]
pub struct UnknownLabel(pub String);

/// Number of people living in a house, always within [MIN, MAX]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberCount(u8);

impl MemberCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 8;

    pub fn clamped(count: i64) -> Self {
        Self(count.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MemberCount {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for MemberCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub name: String,
    pub kind: Option<HouseType>,
    pub member_count: Option<MemberCount>,
    pub invite_code: Option<InviteCode>,
}

impl House {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            member_count: None,
            invite_code: None,
        }
    }
}

/// Everything the create-house flow collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseDraft {
    pub name: String,
    pub kind: HouseType,
    pub member_count: MemberCount,
    pub invite_code: InviteCode,
}

impl From<HouseDraft> for House {
    fn from(draft: HouseDraft) -> Self {
        Self {
            name: draft.name,
            kind: Some(draft.kind),
            member_count: Some(draft.member_count),
            invite_code: Some(draft.invite_code),
        }
    }
}

/// Which way a screen change slides; no effect on logical state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationDirection {
    #[default]
    Forward,
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Mahmut"), "M");
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "");
        assert_eq!(initials("  jane   smith "), "JS");
        assert_eq!(initials("abdüllatif"), "A");
    }

    #[test]
    fn test_due_label_parse() {
        assert_eq!("This week".parse::<DueLabel>().unwrap(), DueLabel::ThisWeek);
        assert_eq!("Overdue".parse::<DueLabel>().unwrap(), DueLabel::Overdue);
        assert!("this week".parse::<DueLabel>().is_err());
        assert!(DueLabel::Overdue.is_due_today());
        assert!(!DueLabel::Tomorrow.is_due_today());
    }

    #[test]
    fn test_house_type_parse() {
        assert_eq!(
            "Student House".parse::<HouseType>().unwrap(),
            HouseType::StudentHouse
        );
        assert_eq!("dorm room".parse::<HouseType>().unwrap(), HouseType::DormRoom);
        assert!("Castle".parse::<HouseType>().is_err());
        for kind in HouseType::ALL {
            assert_eq!(HouseType::from_index(kind.to_index()), kind);
        }
    }

    #[test]
    fn test_member_count_clamps() {
        assert_eq!(MemberCount::clamped(0).get(), 2);
        assert_eq!(MemberCount::clamped(5).get(), 5);
        assert_eq!(MemberCount::clamped(42).get(), 8);
        assert_eq!(MemberCount::default().get(), 3);
    }
}
