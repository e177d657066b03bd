// Household members and the demo seed data

use super::types::{Chore, DueLabel, User, UserId};

/// Lookup table for the people in a house. Chores reference members by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The four demo housemates
    pub fn demo() -> Self {
        Self::new(vec![
            User::new("Mahmut", 12),
            User::new("Jane", 8),
            User::new("Abdüllatif", 10),
            User::new("Katya", 6),
        ])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn first(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    /// Member with the most points; ties go to whoever comes first
    pub fn weekly_leader(&self) -> Option<&User> {
        self.users.iter().fold(None, |best: Option<&User>, user| match best {
            Some(b) if b.points >= user.points => Some(b),
            _ => Some(user),
        })
    }

    /// Members ordered by points, highest first (stable for ties)
    pub fn leaderboard(&self) -> Vec<&User> {
        let mut ranked: Vec<&User> = self.users.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }

    /// Fixed seed chores. Every call builds fresh chores with new ids.
    pub fn sample_chores(&self) -> Vec<Chore> {
        let Some(id_at) = self.seed_ids() else {
            return Vec::new();
        };

        vec![
            Chore::new(
                "Take out the trash",
                "Empty all trash bins and take bags to the dumpster",
                id_at[0],
                DueLabel::Today,
            ),
            Chore::new(
                "Clean kitchen counter",
                "Wipe down all surfaces, clean sink and organize items",
                id_at[1],
                DueLabel::Today,
            ),
            Chore::new(
                "Vacuum living room",
                "Vacuum carpet and clean under furniture",
                id_at[2],
                DueLabel::Overdue,
            ),
            Chore::new(
                "Clean bathroom",
                "Clean toilet, shower, sink and mirror",
                id_at[3],
                DueLabel::ThisWeek,
            ),
            Chore::new(
                "Do laundry",
                "Wash, dry and fold clothes",
                id_at[0],
                DueLabel::Today,
            )
            .done(),
        ]
    }

    // Seed chores need four members to assign to
    fn seed_ids(&self) -> Option<[UserId; 4]> {
        match self.users.as_slice() {
            [a, b, c, d, ..] => Some([a.id, b.id, c.id, d.id]),
            _ => None,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::demo()
    }
}
