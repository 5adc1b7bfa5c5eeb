//! End-to-end walkthrough of the reference remote sequence.

use switchboard::core::{CeilingFan, DeviceFamily, DeviceId, DeviceRegistry, Lamp, Power, Slot};
use switchboard::{HomeConfig, RemoteControl, RemoteControlBuilder, UndoOutcome};

fn living_room_and_bedroom() -> (RemoteControl, DeviceId, DeviceId) {
    let mut devices = DeviceRegistry::new();
    let lamp = devices.register(Lamp::new("Living room"));
    let fan = devices.register(CeilingFan::new("Bedroom"));

    let remote = RemoteControlBuilder::new(devices)
        .light_on(lamp)
        .light_off(lamp)
        .fan_on(fan)
        .fan_off(fan)
        .build()
        .unwrap();
    (remote, lamp, fan)
}

fn power(remote: &RemoteControl, id: DeviceId) -> Power {
    remote.device(id).map(|d| d.power()).unwrap()
}

#[test]
fn reference_sequence_prints_expected_lines() {
    let mut remote = HomeConfig::default().into_remote().unwrap();
    let mut lines = Vec::new();

    lines.push(remote.light_on().to_string());
    lines.push(remote.light_off().to_string());
    lines.push(remote.fan_on().to_string());
    lines.push(remote.fan_off().to_string());
    for _ in 0..4 {
        lines.push(remote.undo().to_string());
    }

    let output = lines.join("\n");
    assert_eq!(
        output,
        "Living room Lamp is ON\n\
         Living room Lamp is OFF\n\
         Bedroom Ceiling Fan is ON\n\
         Bedroom Ceiling Fan is OFF\n\
         Undoing last command...\n\
         Bedroom Ceiling Fan is ON\n\
         Undoing last command...\n\
         Bedroom Ceiling Fan is OFF\n\
         Undoing last command...\n\
         Living room Lamp is ON\n\
         Undoing last command...\n\
         Living room Lamp is OFF"
    );
}

#[test]
fn undo_order_is_strict_reverse() {
    let (mut remote, _, _) = living_room_and_bedroom();
    for slot in Slot::ALL {
        remote.run(slot);
    }

    let undone: Vec<(Slot, Power)> = (0..4)
        .filter_map(|_| match remote.undo() {
            UndoOutcome::Undone { slot, event } => Some((slot, event.power)),
            UndoOutcome::NothingToUndo => None,
        })
        .collect();

    assert_eq!(
        undone,
        vec![
            (Slot::FanOff, Power::On),
            (Slot::FanOn, Power::Off),
            (Slot::LightOff, Power::On),
            (Slot::LightOn, Power::Off),
        ]
    );
}

#[test]
fn fifth_undo_changes_nothing() {
    let (mut remote, lamp, fan) = living_room_and_bedroom();
    for slot in Slot::ALL {
        remote.run(slot);
    }
    for _ in 0..4 {
        assert!(remote.undo().is_undone());
    }

    let lamp_before = power(&remote, lamp);
    let fan_before = power(&remote, fan);

    let outcome = remote.undo();

    assert_eq!(outcome, UndoOutcome::NothingToUndo);
    assert_eq!(outcome.to_string(), "No commands to undo.");
    assert_eq!(power(&remote, lamp), lamp_before);
    assert_eq!(power(&remote, fan), fan_before);
    assert!(remote.history().is_empty());
}

#[test]
fn run_then_undo_restores_power_for_every_slot() {
    for slot in Slot::ALL {
        let (mut remote, _, _) = living_room_and_bedroom();
        let device = remote.command(slot).device();

        // Start each device in the state the slot's inverse would leave it.
        let start = remote.command(slot).target().inverse();
        if start == Power::On {
            let on = match slot.family() {
                DeviceFamily::Lighting => Slot::LightOn,
                DeviceFamily::Fanning => Slot::FanOn,
            };
            remote.run(on);
        }
        assert_eq!(power(&remote, device), start);
        let depth = remote.history().len();

        remote.run(slot);
        assert_eq!(power(&remote, device), start.inverse());

        remote.undo();
        assert_eq!(power(&remote, device), start, "{slot}");
        assert_eq!(remote.history().len(), depth);
    }
}
