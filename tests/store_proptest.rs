//! Property-based tests for the session store
//!
//! Uses proptest to generate invite-code spellings and action sequences and
//! checks the guarantees the store makes for every input.

use houseflow::household::{
    AppState, DEMO_INVITE_CODES, Event, HouseDraft, HouseType, InviteCode, MemberCount, Screen,
    StoreError,
};
use proptest::prelude::*;

fn signed_in_on_join() -> AppState {
    let mut app = AppState::default();
    app.request_authentication().unwrap();
    app.authenticate().unwrap();
    app.request_join_house().unwrap();
    app
}

/// A demo code with each letter's case chosen independently
fn demo_code_spelling() -> impl Strategy<Value = String> {
    (
        prop::sample::select(DEMO_INVITE_CODES.to_vec()),
        prop::collection::vec(any::<bool>(), 8),
    )
        .prop_map(|(code, lower)| {
            code.chars()
                .zip(lower)
                .map(|(c, lower)| if lower { c.to_ascii_lowercase() } else { c })
                .collect()
        })
}

fn any_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::RequestAuthentication),
        Just(Event::Authenticate),
        "[A-Za-z ]{1,12}".prop_map(Event::SelectHouse),
        Just(Event::RequestCreateHouse),
        Just(Event::CancelToHouseSelection),
        Just(Event::RequestJoinHouse),
        prop::sample::select(vec!["HOUSE123", "demo456", "nope", " TEST789 "])
            .prop_map(|c| Event::JoinHouse(c.to_string())),
        "[A-Za-z]{1,12}".prop_map(|name| Event::CreateHouse(HouseDraft {
            name,
            kind: HouseType::SharedHouse,
            member_count: MemberCount::default(),
            invite_code: InviteCode::generate(),
        })),
        Just(Event::Logout),
    ]
}

proptest! {
    #[test]
    fn prop_demo_codes_join_in_any_case(code in demo_code_spelling()) {
        let mut app = signed_in_on_join();
        prop_assert_eq!(app.join_house(&code), Ok(()));
        prop_assert!(app.has_selected_house());
        prop_assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn prop_other_codes_are_rejected(code in "[A-Za-z0-9!*]{0,10}") {
        let upper = code.to_uppercase();
        prop_assume!(!DEMO_INVITE_CODES.contains(&upper.as_str()));

        let mut app = signed_in_on_join();
        prop_assert_eq!(app.join_house(&code), Err(StoreError::InvalidInviteCode));
        prop_assert!(!app.has_selected_house());
        prop_assert_eq!(app.screen(), Screen::JoinHouse);
    }

    #[test]
    fn prop_padded_demo_codes_are_rejected(
        code in demo_code_spelling(),
        before in "[ \t\n]{0,3}",
        after in "[ \t\n]{0,3}",
    ) {
        prop_assume!(!before.is_empty() || !after.is_empty());
        let padded = format!("{before}{code}{after}");

        let mut app = signed_in_on_join();
        let epoch = app.epoch();
        prop_assert_eq!(app.join_house(&padded), Err(StoreError::InvalidInviteCode));
        prop_assert!(!app.has_selected_house());
        prop_assert_eq!(app.screen(), Screen::JoinHouse);
        prop_assert_eq!(app.epoch(), epoch);
    }

    #[test]
    fn prop_double_toggle_restores_chores(index in 0usize..5) {
        let mut app = signed_in_on_join();
        let before = app.chores().to_vec();
        let id = before[index].id;

        app.toggle_chore_completion(id);
        app.toggle_chore_completion(id);
        prop_assert_eq!(app.chores(), before.as_slice());
    }

    #[test]
    fn prop_logout_always_resets(events in prop::collection::vec(any_event(), 0..20)) {
        let mut app = AppState::default();
        for event in events {
            let _ = app.dispatch(event);
        }

        app.logout();
        prop_assert_eq!(app.screen(), Screen::Onboarding);
        prop_assert!(!app.is_authenticated());
        prop_assert!(!app.has_selected_house());
        prop_assert!(app.chores().is_empty());
        prop_assert!(app.current_user().is_none());
        prop_assert_eq!(app.house_name(), "");
    }

    #[test]
    fn prop_session_screens_need_a_user(events in prop::collection::vec(any_event(), 0..30)) {
        let mut app = AppState::default();
        for event in events {
            let _ = app.dispatch(event);
            prop_assert_eq!(app.screen().requires_session(), app.is_authenticated());
            if app.screen() == Screen::Dashboard {
                prop_assert!(app.has_selected_house());
            }
        }
    }

    #[test]
    fn prop_member_count_is_clamped(raw in any::<i64>()) {
        let count = MemberCount::clamped(raw).get();
        prop_assert!((MemberCount::MIN..=MemberCount::MAX).contains(&count));
    }
}
