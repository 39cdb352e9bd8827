//=========================================================================
// Aetheric UI Context: Library Root
//
// Declarative UI visibility for the Aetheric Engine: elements are grouped
// into named contexts and a single call switches which group is shown.
//
// Responsibilities:
// - Decide per element whether it is visible in the current context
// - Drive show/hide tweens through the host's transforms
// - Keep interactive controls disabled while hidden or animating in
//
// Typical usage:
// ```
// use aetheric_ui_context::prelude::*;
// use glam::Vec3;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Screen { Title, Options }
// impl ContextKey for Screen {}
//
// let registry = ContextRegistry::new();
// let mut ui = ContextManagerBuilder::new(registry)
//     .with_group(
//         ContextGroup::new()
//             .with_context(Screen::Title)
//             .with_element(VisualElement::new(
//                 "title_panel",
//                 ElementConfig::new().with_hide_mode(HideMode::Movement {
//                     offset: Vec3::new(0.0, -400.0, 0.0),
//                 }),
//                 Box::new(LocalTransform::default()),
//             )),
//     )
//     .with_start_context(Screen::Title)
//     .as_main()
//     .build()
//     .expect("no other main manager");
//
// ui.initialize();
// ui.change_context(Screen::Options);
// ui.update(1.0 / 60.0);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the context and element systems. Most applications
// only need the re-exports in `prelude`.
//
pub mod core;
pub mod prelude;
