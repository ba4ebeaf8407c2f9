use crate::components::{PuzzleLabel, RestartPrompt};
use crate::run_state::{RunState, Screen};
use bevy::prelude::*;

const RESTART_QUESTION: &str = "Restart game? (Y/N)";
const DECLINED: &str = "Thanks for playing!";

fn text_line(
    text: impl Into<String>,
    font_size: f32,
    color: Color,
    left: f32,
    top: f32,
) -> (Text, TextFont, TextColor, Node) {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            top: Val::Px(top),
            ..default()
        },
    )
}

pub fn spawn_puzzle_screen(mut commands: Commands) {
    let lines = [
        (PuzzleLabel::Progress, 10.0, Color::BLACK),
        (PuzzleLabel::Prompt, 50.0, Color::BLACK),
        (PuzzleLabel::Answer, 100.0, Color::BLACK),
        (PuzzleLabel::Countdown, 150.0, Color::srgb(1.0, 0.0, 0.0)),
    ];
    for (label, top, color) in lines {
        commands.spawn((
            text_line("", 24.0, color, 10.0, top),
            label,
            StateScoped(Screen::Puzzle),
        ));
    }
}

pub fn update_puzzle_text(
    time: Res<Time>,
    run_state: Res<RunState>,
    mut label_query: Query<(&mut Text, &PuzzleLabel)>,
) {
    // The session is gone the frame it resolves; keep the last text up.
    let Some(session) = run_state.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };
    let now = time.elapsed();

    for (mut text, label) in label_query.iter_mut() {
        text.0 = match label {
            PuzzleLabel::Progress => format!(
                "Question {} of {}",
                session.current_index() + 1,
                session.questions().len()
            ),
            PuzzleLabel::Prompt => question.prompt().to_string(),
            PuzzleLabel::Answer => format!("Your answer: {}", session.input()),
            PuzzleLabel::Countdown => {
                format!("Time remaining: {} seconds", session.remaining_secs(now))
            }
        };
    }
}

pub fn spawn_game_over_screen(mut commands: Commands) {
    commands.spawn((
        text_line("GAME OVER", 48.0, Color::srgb(1.0, 0.0, 0.0), 200.0, 200.0),
        StateScoped(Screen::GameOver),
    ));
    commands.spawn((
        text_line(RESTART_QUESTION, 32.0, Color::BLACK, 200.0, 300.0),
        RestartPrompt,
        StateScoped(Screen::GameOver),
    ));
}

pub fn update_game_over_prompt(
    run_state: Res<RunState>,
    mut prompt_query: Query<&mut Text, With<RestartPrompt>>,
) {
    let Some(prompt) = run_state.game_over_prompt() else {
        return;
    };
    for mut text in prompt_query.iter_mut() {
        let wanted = if prompt.awaiting_choice {
            RESTART_QUESTION
        } else {
            DECLINED
        };
        if text.0 != wanted {
            text.0 = wanted.to_string();
        }
    }
}

pub fn spawn_win_screen(mut commands: Commands) {
    commands.spawn((
        text_line(
            "CONGRATULATIONS! YOU WIN!",
            48.0,
            Color::srgb(0.0, 1.0, 0.0),
            150.0,
            250.0,
        ),
        StateScoped(Screen::Win),
    ));
    commands.spawn((
        text_line("Press any key to restart.", 32.0, Color::BLACK, 150.0, 350.0),
        StateScoped(Screen::Win),
    ));
}
