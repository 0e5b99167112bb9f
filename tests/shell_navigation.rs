use crux_core::testing::AppTester;
use sagar_core::capabilities::TimerOutput;
use sagar_core::{App, Effect, Event, Model, ScreenId, ScreenView};

fn renders(update: &crux_core::testing::Update<Effect, Event>) -> bool {
    update.effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

/// Resolve the first timer effect in `update` with an elapse for its own
/// token, feeding resulting events back into the app.
fn fire_idle_timer(
    app: &AppTester<App, Effect>,
    update: crux_core::testing::Update<Effect, Event>,
    model: &mut Model,
) {
    for effect in update.effects {
        if let Effect::Timer(mut request) = effect {
            let token = match request.operation {
                sagar_core::capabilities::TimerOperation::Start { token, .. } => token,
                sagar_core::capabilities::TimerOperation::Cancel { .. } => continue,
            };
            let resolved = app
                .resolve(&mut request, TimerOutput::Elapsed { token })
                .expect("timer resolves");
            for event in resolved.events {
                app.update(event, model);
            }
            return;
        }
    }
    panic!("no timer effect to fire");
}

#[test]
fn app_starts_on_updates_with_expanded_nav() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    assert!(renders(&update));

    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Updates);
    assert!(!view.nav.collapsed);
    assert_eq!(view.nav.items.len(), 5);
}

#[test]
fn last_navigation_wins() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::ScreenSelected(ScreenId::Map), &mut model);
    app.update(Event::ScreenSelected(ScreenId::Reports), &mut model);
    app.update(Event::ScreenSelected(ScreenId::Profile), &mut model);

    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Profile);
    assert!(matches!(view.content, ScreenView::Profile(_)));
}

#[test]
fn idle_timer_collapses_nav_after_ten_minutes() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    fire_idle_timer(&app, update, &mut model);

    assert!(app.view(&model).nav.collapsed);
}

#[test]
fn interaction_before_elapse_keeps_nav_expanded() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let stale = app.update(Event::AppStarted, &mut model);
    // A tap re-arms the countdown; the earlier timer still fires but its
    // token is stale by then.
    app.update(Event::ScreenSelected(ScreenId::Map), &mut model);
    fire_idle_timer(&app, stale, &mut model);

    assert!(!app.view(&model).nav.collapsed);
    assert_eq!(app.view(&model).screen, ScreenId::Map);
}

#[test]
fn tap_expands_collapsed_nav() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    fire_idle_timer(&app, update, &mut model);
    assert!(app.view(&model).nav.collapsed);

    app.update(Event::ScreenSelected(ScreenId::Reports), &mut model);
    assert!(!app.view(&model).nav.collapsed);
}

fn timer_ops(update: &crux_core::testing::Update<Effect, Event>) -> (usize, usize) {
    let mut starts = 0;
    let mut cancels = 0;
    for effect in &update.effects {
        if let Effect::Timer(request) = effect {
            match request.operation {
                sagar_core::capabilities::TimerOperation::Start { .. } => starts += 1,
                sagar_core::capabilities::TimerOperation::Cancel { .. } => cancels += 1,
            }
        }
    }
    (starts, cancels)
}

#[test]
fn rearming_cancels_the_displaced_timer() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    // First arm has nothing to cancel.
    let update = app.update(Event::AppStarted, &mut model);
    assert_eq!(timer_ops(&update), (1, 0));

    // Each interaction swaps the pending timer: one cancel, one start.
    let update = app.update(Event::ScreenSelected(ScreenId::Map), &mut model);
    assert_eq!(timer_ops(&update), (1, 1));

    let update = app.update(Event::UpdatesSearchChanged("waves".into()), &mut model);
    assert_eq!(timer_ops(&update), (1, 1));

    let update = app.update(Event::NavToggled, &mut model);
    assert_eq!(timer_ops(&update), (1, 1));
}

#[test]
fn manual_toggle_flips_nav_visibility() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::AppStarted, &mut model);
    app.update(Event::NavToggled, &mut model);
    assert!(app.view(&model).nav.collapsed);

    app.update(Event::NavToggled, &mut model);
    assert!(!app.view(&model).nav.collapsed);
}

#[test]
fn backgrounding_cancels_the_idle_timer() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let armed = app.update(Event::AppStarted, &mut model);
    let update = app.update(Event::AppBackgrounded, &mut model);
    assert!(update
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Timer(_))));

    // A timer armed before teardown must not collapse the bar late.
    fire_idle_timer(&app, armed, &mut model);
    assert!(!app.view(&model).nav.collapsed);
}

#[test]
fn navigating_away_unmounts_screen_state() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::UpdatesSearchChanged("cyclone".into()), &mut model);
    app.update(Event::ScreenSelected(ScreenId::Map), &mut model);
    app.update(Event::MapHeatmapToggled, &mut model);
    app.update(Event::ScreenSelected(ScreenId::Updates), &mut model);

    // Both screens are back to their freshly mounted state.
    if let ScreenView::Updates(updates) = app.view(&model).content {
        assert!(updates.search.is_empty());
    } else {
        panic!("updates screen not mounted");
    }
    assert!(!model.map.show_heatmap);
}

#[test]
fn full_session_scenario() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    // Fresh shell: updates, expanded, English.
    app.update(Event::AppStarted, &mut model);
    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Updates);
    assert!(!view.nav.collapsed);
    assert_eq!(view.language_code, "en");

    // Switch to Hindi, then to the map.
    app.update(Event::LanguageSelected { code: "hi".into() }, &mut model);
    let update = app.update(Event::ScreenSelected(ScreenId::Map), &mut model);
    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Map);
    assert_eq!(view.language_code, "hi");

    // Ten minutes of idleness collapse the bar.
    fire_idle_timer(&app, update, &mut model);
    assert!(app.view(&model).nav.collapsed);

    // The next navigation expands it again, still in Hindi.
    app.update(Event::ScreenSelected(ScreenId::Profile), &mut model);
    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Profile);
    assert!(!view.nav.collapsed);
    assert_eq!(view.language_code, "hi");
}

#[test]
fn deep_link_navigation_by_name() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::ScreenRequested { name: "report".into() }, &mut model);
    assert!(matches!(app.view(&model).content, ScreenView::Report(_)));

    // Unknown names are ignored, current screen stays mounted.
    let update = app.update(Event::ScreenRequested { name: "dashboard".into() }, &mut model);
    assert!(renders(&update));
    assert!(matches!(app.view(&model).content, ScreenView::Report(_)));
}
