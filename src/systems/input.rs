use crate::chase::{keyboard_direction, player_velocity, pointer_direction};
use crate::components::Player;
use crate::events::RunEvent;
use crate::quiz::PuzzleKey;
use crate::resources::GameSettings;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::touch::Touches;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::Velocity;

pub fn player_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    settings: Res<GameSettings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut player_query: Query<(&Transform, &mut Velocity, &Player)>,
) {
    let Ok((transform, mut velocity, player)) = player_query.get_single_mut() else {
        return;
    };
    let position = transform.translation.truncate();

    // A held pointer overrides the keyboard
    let held = if mouse_input.pressed(MouseButton::Left) {
        window_query.get_single().ok().and_then(Window::cursor_position)
    } else {
        touches.first_pressed_position()
    };
    let target = held.and_then(|screen_pos| {
        let (camera, camera_transform) = camera_query.get_single().ok()?;
        camera.viewport_to_world_2d(camera_transform, screen_pos).ok()
    });

    let direction = match target {
        Some(target) => pointer_direction(position, target, settings.pointer_dead_zone),
        None => {
            let pressed = |a, b| keyboard_input.pressed(a) || keyboard_input.pressed(b);
            keyboard_direction(
                pressed(KeyCode::ArrowLeft, KeyCode::KeyA),
                pressed(KeyCode::ArrowRight, KeyCode::KeyD),
                pressed(KeyCode::ArrowUp, KeyCode::KeyW),
                pressed(KeyCode::ArrowDown, KeyCode::KeyS),
            )
        }
    };

    velocity.linvel = player_velocity(direction, player.speed);
}

/// Engine key to puzzle key. Named keys other than editing keys are dropped.
pub fn puzzle_key(key: &Key) -> Option<PuzzleKey> {
    match key {
        Key::Backspace => Some(PuzzleKey::Backspace),
        Key::Enter => Some(PuzzleKey::Enter),
        Key::Space => Some(PuzzleKey::Char(' ')),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(PuzzleKey::Char(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

pub fn puzzle_key_system(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut run_events: EventWriter<RunEvent>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        if let Some(key) = puzzle_key(&event.logical_key) {
            run_events.send(RunEvent::Key(key));
        }
    }
}

pub fn game_over_choice_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut run_events: EventWriter<RunEvent>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyY) {
        run_events.send(RunEvent::Restart);
    } else if keyboard_input.just_pressed(KeyCode::KeyN) {
        run_events.send(RunEvent::Decline);
    }
}

pub fn win_any_key_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut run_events: EventWriter<RunEvent>,
) {
    if keyboard_input.get_just_pressed().next().is_some() {
        run_events.send(RunEvent::AnyKey);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_keys() {
        assert_eq!(puzzle_key(&Key::Backspace), Some(PuzzleKey::Backspace));
        assert_eq!(puzzle_key(&Key::Enter), Some(PuzzleKey::Enter));
        assert_eq!(puzzle_key(&Key::Space), Some(PuzzleKey::Char(' ')));
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(
            puzzle_key(&Key::Character("7".into())),
            Some(PuzzleKey::Char('7'))
        );
        assert_eq!(
            puzzle_key(&Key::Character("=".into())),
            Some(PuzzleKey::Char('='))
        );
        // dead-key compositions can deliver several characters at once
        assert_eq!(puzzle_key(&Key::Character("ab".into())), None);
    }

    #[test]
    fn test_other_named_keys_dropped() {
        assert_eq!(puzzle_key(&Key::Shift), None);
        assert_eq!(puzzle_key(&Key::ArrowLeft), None);
        assert_eq!(puzzle_key(&Key::Tab), None);
    }
}
