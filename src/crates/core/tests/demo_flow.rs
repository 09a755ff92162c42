//! End-to-end walk of the simulated IDE under virtual time: chat, the
//! mock terminal, a voice command flipping learning mode on, the debug
//! animator driving frame plans, and a collab exchange.

use std::time::Duration;

use neoncode_core::animator::{Speed, StepAnimator, BASE_INTERVAL};
use neoncode_core::chat::{ChatSession, GREETING, RESPONSE_DELAY};
use neoncode_core::collab::CollabChat;
use neoncode_core::editor::{DemoEditor, Potential, ANALYSIS_DELAY, SUGGESTIONS};
use neoncode_core::frame::plan_frame;
use neoncode_core::lessons::LessonDeck;
use neoncode_core::session::Session;
use neoncode_core::shell::{MockShell, ShellEffect};
use neoncode_core::trace::{FIB_EXPLANATIONS, FIB_NODES, FIB_STEPS};
use neoncode_core::voice::{VoiceEffect, VoicePanel, DISMISS_AFTER, PROCESSING_DELAY};
use neoncode_core::{Clock, ManualClock};
use neoncode_core_types::MessageRole;

#[test]
fn full_demo_session_under_virtual_time() {
    let clock = ManualClock::new();
    let mut session = Session::new();

    // Ask the assistant to optimize; the reply lands after the delay.
    let mut chat = ChatSession::new();
    assert_eq!(chat.messages()[0].text, GREETING);
    assert!(chat.submit("optimize my fibonacci function", clock.now()));
    assert!(chat.is_thinking());
    clock.advance(RESPONSE_DELAY);
    chat.poll(clock.now());
    let reply = chat.messages().last().unwrap();
    assert_eq!(reply.role, MessageRole::Assistant);
    assert!(reply.text.contains("memoization"));

    // Run the code in the mock terminal.
    session.set_terminal_open(true);
    let mut shell = MockShell::new();
    assert_eq!(shell.execute("run", clock.now()), ShellEffect::None);
    assert!(shell.is_executing());
    clock.advance(Duration::from_millis(800));
    shell.poll(clock.now());
    assert!(!shell.is_executing());
    assert!(shell
        .output()
        .iter()
        .any(|line| line == "Compilation successful!"));
    assert_eq!(shell.execute("exit", clock.now()), ShellEffect::Close);
    session.set_terminal_open(false);

    // A voice command switches learning mode on.
    let mut voice = VoicePanel::new();
    voice.toggle_listening();
    if let Some(transcript) = voice.transcript_mut() {
        transcript.push_str("start learning mode");
    }
    assert!(voice.submit(clock.now()));
    clock.advance(PROCESSING_DELAY);
    let effect = voice.poll(clock.now());
    assert_eq!(effect, Some(VoiceEffect::ActivateLearning));
    session.set_learning_mode(true);
    clock.advance(DISMISS_AFTER);
    voice.poll(clock.now());
    assert_eq!(voice.transcript(), "");

    // Step through the first lesson and back out.
    let mut deck = LessonDeck::new();
    deck.next();
    assert_eq!(deck.current().title, "Step 1: Declaring a Function");
    session.set_learning_mode(false);

    // Debug visualization: double speed covers two steps per base interval.
    session.set_debug_mode(true);
    let mut animator = StepAnimator::new(FIB_STEPS.len(), clock.now());
    animator.set_speed(Speed::Double);
    clock.advance(BASE_INTERVAL);
    animator.tick(clock.now());
    assert_eq!(animator.index(), 2);

    let step = &FIB_STEPS[animator.index()];
    let plan = plan_frame(
        &FIB_NODES,
        step,
        animator.index(),
        FIB_STEPS.len(),
        Some(FIB_EXPLANATIONS[animator.index()]),
        (400.0, 300.0),
        0.0,
    );
    assert_eq!(plan.step_counter, "Step: 3/22");
    assert_eq!(plan.nodes.len(), step.active.len());
    session.set_debug_mode(false);

    // Apply the memoization suggestion in the editor.
    let mut editor = DemoEditor::new();
    editor.apply(&SUGGESTIONS[0], clock.now());
    clock.advance(ANALYSIS_DELAY);
    editor.poll(clock.now());
    assert_eq!(editor.analysis().optimization_potential, Potential::Low);

    // One round of team chat.
    session.toggle_multiplayer();
    let mut collab = CollabChat::new();
    assert!(collab.send("I found a bug in the loop", clock.now()));
    clock.advance(Duration::from_millis(1500));
    collab.poll(clock.now());
    assert!(collab
        .messages()
        .last()
        .unwrap()
        .text
        .starts_with("Let's debug this"));
}
