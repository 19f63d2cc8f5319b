//! Test-only writer for BSOR bytes.
#![allow(dead_code)]

use bsor_rs::replay::types::*;
use bsor_rs::replay::{Section, MAGIC_NUMBER};
use byteorder::{LittleEndian, WriteBytesExt};

pub fn write_string(out: &mut Vec<u8>, s: &str) {
    out.write_i32::<LittleEndian>(s.len() as i32).unwrap();
    out.extend_from_slice(s.as_bytes());
}

pub fn write_vector3(out: &mut Vec<u8>, v: &Vector3) {
    for c in [v.x, v.y, v.z] {
        out.write_f32::<LittleEndian>(c).unwrap();
    }
}

fn write_pose(out: &mut Vec<u8>, pose: &Pose) {
    write_vector3(out, &pose.position);
    let r = &pose.rotation;
    for c in [r.x, r.y, r.z, r.w] {
        out.write_f32::<LittleEndian>(c).unwrap();
    }
}

pub fn write_info(out: &mut Vec<u8>, info: &Info, raw_modifiers: &str) {
    out.push(Section::Info as u8);
    for s in [
        &info.version,
        &info.game_version,
        &info.timestamp,
        &info.player_id,
        &info.player_name,
        &info.platform,
        &info.tracking_system,
        &info.hmd,
        &info.controller,
        &info.hash,
        &info.song_name,
        &info.mapper,
        &info.difficulty,
    ] {
        write_string(out, s);
    }
    out.write_i32::<LittleEndian>(info.score).unwrap();
    write_string(out, &info.mode);
    write_string(out, &info.environment);
    write_string(out, raw_modifiers);
    out.write_f32::<LittleEndian>(info.jump_distance).unwrap();
    out.push(info.left_handed as u8);
    out.write_f32::<LittleEndian>(info.height).unwrap();
    out.write_f32::<LittleEndian>(info.start_time).unwrap();
    out.write_f32::<LittleEndian>(info.fail_time).unwrap();
    out.write_f32::<LittleEndian>(info.speed).unwrap();
}

fn write_cut(out: &mut Vec<u8>, cut: &CutInfo) {
    for b in [
        cut.speed_ok,
        cut.direction_ok,
        cut.saber_type_ok,
        cut.was_cut_too_soon,
    ] {
        out.push(b as u8);
    }
    out.write_f32::<LittleEndian>(cut.saber_speed).unwrap();
    write_vector3(out, &cut.saber_dir);
    out.write_i32::<LittleEndian>(cut.saber_type).unwrap();
    out.write_f32::<LittleEndian>(cut.time_deviation).unwrap();
    out.write_f32::<LittleEndian>(cut.cut_dir_deviation).unwrap();
    write_vector3(out, &cut.cut_point);
    write_vector3(out, &cut.cut_normal);
    for f in [
        cut.cut_distance_to_center,
        cut.cut_angle,
        cut.before_cut_rating,
        cut.after_cut_rating,
    ] {
        out.write_f32::<LittleEndian>(f).unwrap();
    }
}

fn write_section_header(out: &mut Vec<u8>, section: Section, count: usize) {
    out.push(section as u8);
    out.write_i32::<LittleEndian>(count as i32).unwrap();
}

/// Encodes everything after the info section.
pub fn write_events(out: &mut Vec<u8>, replay: &Replay) {
    write_section_header(out, Section::Frames, replay.frames.len());
    for frame in &replay.frames {
        out.write_f32::<LittleEndian>(frame.time).unwrap();
        out.write_i32::<LittleEndian>(frame.fps).unwrap();
        write_pose(out, &frame.head);
        write_pose(out, &frame.left_hand);
        write_pose(out, &frame.right_hand);
    }

    write_section_header(out, Section::Notes, replay.notes.len());
    for note in &replay.notes {
        out.write_i32::<LittleEndian>(note.note_id.0).unwrap();
        out.write_f32::<LittleEndian>(note.event_time).unwrap();
        out.write_f32::<LittleEndian>(note.spawn_time).unwrap();
        out.write_i32::<LittleEndian>(note.event_type_code()).unwrap();
        if let Some(cut) = note.cut_info() {
            write_cut(out, cut);
        }
    }

    write_section_header(out, Section::Walls, replay.walls.len());
    for wall in &replay.walls {
        out.write_i32::<LittleEndian>(wall.wall_id.0).unwrap();
        out.write_f32::<LittleEndian>(wall.energy).unwrap();
        out.write_f32::<LittleEndian>(wall.time).unwrap();
        out.write_f32::<LittleEndian>(wall.spawn_time).unwrap();
    }

    write_section_header(out, Section::Heights, replay.heights.len());
    for height in &replay.heights {
        out.write_f32::<LittleEndian>(height.height).unwrap();
        out.write_f32::<LittleEndian>(height.time).unwrap();
    }

    write_section_header(out, Section::Pauses, replay.pauses.len());
    for pause in &replay.pauses {
        out.write_i64::<LittleEndian>(pause.duration).unwrap();
        out.write_f32::<LittleEndian>(pause.time).unwrap();
    }
}

pub fn encode_with_raw_modifiers(replay: &Replay, raw_modifiers: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.write_u32::<LittleEndian>(replay.header.magic_number).unwrap();
    out.push(replay.header.file_version);
    write_info(&mut out, &replay.info, raw_modifiers);
    write_events(&mut out, replay);
    out
}

pub fn encode(replay: &Replay) -> Vec<u8> {
    encode_with_raw_modifiers(replay, &replay.info.modifiers.join(","))
}

pub fn sample_info() -> Info {
    Info {
        version: "0.5.4".to_string(),
        game_version: "1.29.1".to_string(),
        timestamp: "1680000000".to_string(),
        player_id: "76561198000000000".to_string(),
        player_name: "Player".to_string(),
        platform: "steam".to_string(),
        tracking_system: "Oculus".to_string(),
        hmd: "Quest 2".to_string(),
        controller: "Touch".to_string(),
        hash: "ABCDEF0123456789".to_string(),
        song_name: "Song".to_string(),
        mapper: "Mapper".to_string(),
        difficulty: "ExpertPlus".to_string(),
        score: 1_000_000,
        mode: "Standard".to_string(),
        environment: "The First".to_string(),
        modifiers: vec!["FS".to_string(), "GN".to_string()],
        jump_distance: 18.5,
        left_handed: false,
        height: 1.8,
        start_time: 0.0,
        fail_time: 0.0,
        speed: 1.0,
    }
}

pub fn empty_replay() -> Replay {
    Replay {
        header: ReplayHeader {
            magic_number: MAGIC_NUMBER,
            file_version: 1,
        },
        info: sample_info(),
        frame_count: 0,
        frames: vec![],
        note_count: 0,
        notes: vec![],
        wall_count: 0,
        walls: vec![],
        height_count: 0,
        heights: vec![],
        pause_count: 0,
        pauses: vec![],
    }
}

pub fn sample_cut() -> CutInfo {
    CutInfo {
        speed_ok: true,
        direction_ok: true,
        saber_type_ok: true,
        was_cut_too_soon: false,
        saber_speed: 4.25,
        saber_dir: Vector3 {
            x: 0.0,
            y: -1.0,
            z: 0.0,
        },
        saber_type: 0,
        time_deviation: 0.012,
        cut_dir_deviation: 7.5,
        cut_point: Vector3 {
            x: -0.3,
            y: 1.1,
            z: 0.0,
        },
        cut_normal: Vector3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        cut_distance_to_center: 0.08,
        cut_angle: 110.0,
        before_cut_rating: 1.0,
        after_cut_rating: 0.9,
    }
}

pub fn frame(time: f32, fps: i32) -> Frame {
    let pose = Pose {
        position: Vector3 {
            x: 0.1,
            y: 1.7,
            z: -0.2,
        },
        rotation: Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        },
    };
    Frame {
        time,
        fps,
        head: pose,
        left_hand: pose,
        right_hand: pose,
    }
}

pub fn note(id: i32, time: f32, kind: NoteEventKind) -> NoteEvent {
    NoteEvent {
        note_id: NoteId(id),
        event_time: time,
        spawn_time: time - 0.5,
        kind,
    }
}

/// A replay with data in every section and every note event kind.
pub fn full_replay() -> Replay {
    let frames = vec![frame(0.0, 90), frame(0.011, 72), frame(0.022, 120)];
    let notes = vec![
        note(30102, 1.0, NoteEventKind::Good(sample_cut())),
        note(30213, 1.5, NoteEventKind::Miss),
        note(30000, 2.0, NoteEventKind::Bomb),
        note(
            31011,
            2.5,
            NoteEventKind::Bad(CutInfo {
                saber_type_ok: false,
                saber_type: 1,
                ..sample_cut()
            }),
        ),
        note(30320, 3.0, NoteEventKind::Good(sample_cut())),
    ];
    let walls = vec![WallEvent {
        wall_id: WallId(112),
        energy: 0.62,
        time: 4.0,
        spawn_time: 3.2,
    }];
    let heights = vec![
        HeightEvent {
            height: 1.75,
            time: 0.0,
        },
        HeightEvent {
            height: 1.8,
            time: 12.0,
        },
    ];
    let pauses = vec![
        PauseEvent {
            duration: 3,
            time: 20.0,
        },
        PauseEvent {
            duration: 12,
            time: 45.5,
        },
    ];

    Replay {
        frame_count: frames.len() as u32,
        frames,
        note_count: notes.len() as u32,
        notes,
        wall_count: walls.len() as u32,
        walls,
        height_count: heights.len() as u32,
        heights,
        pause_count: pauses.len() as u32,
        pauses,
        ..empty_replay()
    }
}
