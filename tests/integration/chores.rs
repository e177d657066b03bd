// Integration tests for chores and the member roster

use houseflow::household::{
    AppState, ChoreId, DueLabel, NewChore, Roster, StoreError, User, UserId,
};

use crate::common::helpers::*;

#[test]
fn test_seeded_chores() {
    let app = signed_in_app();
    let chores = app.chores();
    assert_eq!(chores.len(), 5);
    assert!(chores[4].is_done);
    assert!(chores[..4].iter().all(|c| !c.is_done));

    // Every seed chore points at a member of the roster
    for chore in chores {
        assert!(app.user(chore.assignee).is_some(), "{} has no assignee", chore.title);
    }
}

#[test]
fn test_toggle_twice_restores_chore() {
    let mut app = dashboard_app();
    let before = app.chores().to_vec();
    let id = before[1].id;

    assert_eq!(app.toggle_chore_completion(id), Some(true));
    assert_eq!(app.chores()[1].id, id);
    assert_eq!(app.toggle_chore_completion(id), Some(false));
    assert_eq!(app.chores(), before.as_slice());
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let mut app = dashboard_app();
    let before = app.chores().to_vec();
    assert_eq!(app.toggle_chore_completion(ChoreId::new()), None);
    assert_eq!(app.chores(), before.as_slice());
}

#[test]
fn test_todays_chores_include_overdue() {
    let app = signed_in_app();
    let titles: Vec<_> = app.todays_chores().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Take out the trash",
            "Clean kitchen counter",
            "Vacuum living room",
            "Do laundry",
        ]
    );
}

#[test]
fn test_add_chore() {
    let mut app = dashboard_app();
    let assignee = app.members()[2].id;

    let id = app
        .add_chore(NewChore {
            title: "  Water plants ".to_string(),
            description: "Balcony and hallway".to_string(),
            assignee,
            due: DueLabel::Tomorrow,
        })
        .unwrap();

    assert_eq!(app.chores().len(), 6);
    let chore = app.chore(id).unwrap();
    assert_eq!(chore.title, "Water plants");
    assert_eq!(chore.assignee, assignee);
    assert_eq!(chore.due, DueLabel::Tomorrow);
    assert!(!chore.is_done);
}

#[test]
fn test_add_chore_validation() {
    let mut app = dashboard_app();
    let assignee = app.members()[0].id;

    let blank = NewChore {
        title: "   ".to_string(),
        description: String::new(),
        assignee,
        due: DueLabel::Today,
    };
    assert_eq!(app.add_chore(blank), Err(StoreError::EmptyChoreTitle));

    let stranger = NewChore {
        title: "Mop floor".to_string(),
        description: String::new(),
        assignee: UserId::new(),
        due: DueLabel::Today,
    };
    assert_eq!(app.add_chore(stranger), Err(StoreError::UnknownUser));
    assert_eq!(app.chores().len(), 5);
}

#[test]
fn test_weekly_leader_and_leaderboard() {
    let roster = Roster::demo();
    assert_eq!(roster.weekly_leader().unwrap().name, "Mahmut");

    let points: Vec<u32> = roster.leaderboard().iter().map(|u| u.points).collect();
    assert_eq!(points, vec![12, 10, 8, 6]);
}

#[test]
fn test_leader_ties_go_to_first_member() {
    let roster = Roster::new(vec![
        User::new("Ada", 5),
        User::new("Grace", 5),
        User::new("Linus", 2),
    ]);
    assert_eq!(roster.weekly_leader().unwrap().name, "Ada");
}

#[test]
fn test_small_roster_has_no_seed_chores() {
    let mut app = AppState::new(Roster::new(vec![User::new("Solo Dweller", 0)]));
    app.request_authentication().unwrap();
    app.authenticate().unwrap();
    assert_eq!(app.current_user().unwrap().initials(), "SD");
    assert!(app.chores().is_empty());
}
