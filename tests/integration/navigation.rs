// Integration tests for session navigation
//
// These drive AppState through the screen graph the way the app does and
// check what each step leaves behind.

use houseflow::household::{
    AppState, HouseType, JOINED_HOUSE_NAME, MemberCount, NavigationDirection, Screen, StoreError,
};

use crate::common::helpers::*;

// ============================================================================
// Full sessions
// ============================================================================

#[test]
fn test_create_house_session() {
    let mut app = AppState::default();
    assert_eq!(app.screen(), Screen::Onboarding);

    app.request_authentication().unwrap();
    assert_eq!(app.screen(), Screen::Auth);

    app.authenticate().unwrap();
    assert_eq!(app.screen(), Screen::HouseSelection);
    assert_eq!(app.current_user().unwrap().name, "Mahmut");
    assert_eq!(app.chores().len(), 5);

    app.request_create_house().unwrap();
    assert_eq!(app.screen(), Screen::CreateHouse);

    app.create_house(draft("Test House")).unwrap();
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.house_name(), "Test House");

    let house = app.house().unwrap();
    assert_eq!(house.kind, Some(HouseType::StudentHouse));
    assert_eq!(house.member_count, Some(MemberCount::clamped(4)));
    assert!(house.invite_code.is_some());
}

#[test]
fn test_join_house_session() {
    let mut app = signed_in_app();
    app.request_join_house().unwrap();
    assert_eq!(app.screen(), Screen::JoinHouse);

    app.join_house("demo456").unwrap();
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.house_name(), JOINED_HOUSE_NAME);
    assert!(app.has_selected_house());
}

#[test]
fn test_wrong_code_keeps_join_screen() {
    let mut app = signed_in_app();
    app.request_join_house().unwrap();
    let epoch = app.epoch();

    assert_eq!(app.join_house("WRONG1"), Err(StoreError::InvalidInviteCode));
    assert_eq!(app.screen(), Screen::JoinHouse);
    assert_eq!(app.house_name(), "");
    assert!(!app.has_selected_house());
    assert_eq!(app.epoch(), epoch);
}

#[test]
fn test_store_keeps_house_names_as_given() {
    // Length limits belong to the name input, not the store
    let long = "x".repeat(45);
    let mut app = signed_in_app();
    app.request_create_house().unwrap();
    app.create_house(draft(&long)).unwrap();
    assert_eq!(app.house_name(), long);

    let mut app = signed_in_app();
    app.select_house(&long).unwrap();
    assert_eq!(app.house_name(), long);
}

#[test]
fn test_screen_flags_follow_screen() {
    let mut app = AppState::default();
    app.request_authentication().unwrap();
    assert!(app.show_auth());
    app.authenticate().unwrap();
    assert!(!app.show_auth());

    app.request_create_house().unwrap();
    assert!(app.show_create_house());
    app.cancel_to_house_selection().unwrap();
    app.request_join_house().unwrap();
    assert!(app.show_join_house());
    assert!(!app.show_create_house());
}

#[test]
fn test_select_existing_house() {
    let mut app = signed_in_app();
    app.select_house("Maple Street").unwrap();
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.house_name(), "Maple Street");
    assert!(app.house().unwrap().invite_code.is_none());
}

// ============================================================================
// Rejected transitions
// ============================================================================

#[test]
fn test_rejected_transition_leaves_state_alone() {
    let mut app = AppState::default();
    let before = app.snapshot();
    let epoch = app.epoch();

    let err = app.request_join_house().unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidTransition {
            from: Screen::Onboarding,
            event: "request_join_house",
        }
    );
    assert_eq!(app.screen(), Screen::Onboarding);
    assert_eq!(app.epoch(), epoch);
    assert_eq!(
        serde_json::to_value(app.snapshot()).unwrap(),
        serde_json::to_value(before).unwrap()
    );
}

#[test]
fn test_join_outside_join_screen_is_rejected() {
    let mut app = dashboard_app();
    let house = app.house().cloned();
    assert!(matches!(
        app.join_house("HOUSE123"),
        Err(StoreError::InvalidTransition { .. })
    ));
    assert_eq!(app.house().cloned(), house);
}

#[test]
fn test_cannot_authenticate_from_onboarding() {
    let mut app = AppState::default();
    assert!(app.authenticate().is_err());
    assert!(!app.is_authenticated());
    assert!(app.chores().is_empty());
}

// ============================================================================
// Direction, epoch and logout
// ============================================================================

#[test]
fn test_direction_follows_last_transition() {
    let mut app = signed_in_app();
    assert_eq!(app.direction(), NavigationDirection::Forward);

    app.request_create_house().unwrap();
    app.cancel_to_house_selection().unwrap();
    assert_eq!(app.direction(), NavigationDirection::Backward);
    assert_eq!(app.screen(), Screen::HouseSelection);

    app.request_join_house().unwrap();
    assert_eq!(app.direction(), NavigationDirection::Forward);
}

#[test]
fn test_epoch_bumps_on_every_screen_change() {
    let mut app = AppState::default();
    let mut last = app.epoch();
    app.request_authentication().unwrap();
    assert!(app.epoch() > last);
    last = app.epoch();
    app.authenticate().unwrap();
    assert!(app.epoch() > last);
}

#[test]
fn test_logout_clears_session() {
    let mut app = dashboard_app();
    app.logout();

    assert_eq!(app.screen(), Screen::Onboarding);
    assert_eq!(app.direction(), NavigationDirection::Backward);
    assert!(!app.is_authenticated());
    assert!(!app.has_selected_house());
    assert!(app.current_user().is_none());
    assert!(app.chores().is_empty());
    assert_eq!(app.house_name(), "");
}

#[test]
fn test_reauthenticate_reseeds_chores() {
    let mut app = dashboard_app();
    let first = app.chores()[0].id;
    app.toggle_chore_completion(first);

    app.authenticate().unwrap();
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.chores().len(), 5);
    assert!(app.chores().iter().all(|c| c.id != first));
    assert!(!app.chores()[0].is_done);
}
