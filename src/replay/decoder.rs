use tracing::debug;

use super::buffer::ByteCursor;
use super::parsers::split_modifiers;
use super::types::*;
use super::{DecodeOptions, Section, MAGIC_NUMBER};
use crate::error::{Error, Result};

const FRAME_WIDTH: usize = 4 + 4 + 3 * (12 + 16);
const NOTE_MIN_WIDTH: usize = 4 + 4 + 4 + 4;
const WALL_WIDTH: usize = 4 * 4;
const HEIGHT_WIDTH: usize = 4 + 4;
const PAUSE_WIDTH: usize = 8 + 4;

pub struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    reject_trailing_bytes: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(cursor: ByteCursor<'a>) -> Self {
        Self {
            cursor,
            reject_trailing_bytes: false,
        }
    }

    pub fn with_options(data: &'a [u8], options: &DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::with_text_decoding(data, options.text),
            reject_trailing_bytes: options.reject_trailing_bytes,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Decodes every section in order. Nothing is returned unless all of
    /// them decode.
    pub fn decode(&mut self) -> Result<Replay> {
        let header = self.decode_header()?;

        self.cursor.expect_section(Section::Info)?;
        let info = decode_info(&mut self.cursor)?;
        debug!(
            player = %info.player_name,
            song = %info.song_name,
            offset = self.cursor.position(),
            "decoded info"
        );

        let (frame_count, frames) =
            self.decode_section(Section::Frames, FRAME_WIDTH, decode_frame)?;
        let (note_count, notes) =
            self.decode_section(Section::Notes, NOTE_MIN_WIDTH, decode_note)?;
        let (wall_count, walls) =
            self.decode_section(Section::Walls, WALL_WIDTH, decode_wall)?;
        let (height_count, heights) =
            self.decode_section(Section::Heights, HEIGHT_WIDTH, decode_height)?;
        let (pause_count, pauses) =
            self.decode_section(Section::Pauses, PAUSE_WIDTH, decode_pause)?;

        let remaining = self.cursor.remaining();
        if remaining > 0 {
            if self.reject_trailing_bytes {
                return Err(Error::TrailingBytes {
                    offset: self.cursor.position(),
                    remaining,
                });
            }
            debug!(remaining, "ignoring trailing bytes after pauses");
        }

        Ok(Replay {
            header,
            info,
            frame_count,
            frames,
            note_count,
            notes,
            wall_count,
            walls,
            height_count,
            heights,
            pause_count,
            pauses,
        })
    }

    fn decode_header(&mut self) -> Result<ReplayHeader> {
        let magic_number = self.cursor.read_i32()? as u32;
        if magic_number != MAGIC_NUMBER {
            return Err(Error::BadMagic(magic_number));
        }
        // Stored as-is; no version is refused.
        let file_version = self.cursor.read_u8()?;
        debug!(file_version, "decoded header");

        Ok(ReplayHeader {
            magic_number,
            file_version,
        })
    }

    /// Marker, count, then `count` records. `min_width` is the smallest
    /// possible record size and only bounds the up-front allocation.
    fn decode_section<T>(
        &mut self,
        section: Section,
        min_width: usize,
        mut decode_record: impl FnMut(&mut ByteCursor<'a>) -> Result<T>,
    ) -> Result<(u32, Vec<T>)> {
        self.cursor.expect_section(section)?;
        let count = self.cursor.read_count()?;
        let capacity = (count as usize).min(self.cursor.remaining() / min_width);
        let mut records = Vec::with_capacity(capacity);
        for _ in 0..count {
            records.push(decode_record(&mut self.cursor)?);
        }
        debug!(%section, count, offset = self.cursor.position(), "decoded section");

        Ok((count, records))
    }
}

fn decode_info(cursor: &mut ByteCursor) -> Result<Info> {
    let version = cursor.read_string()?;
    let game_version = cursor.read_string()?;
    let timestamp = cursor.read_string()?;

    let player_id = cursor.read_string()?;
    let player_name = cursor.read_string()?;
    let platform = cursor.read_string()?;

    let tracking_system = cursor.read_string()?;
    let hmd = cursor.read_string()?;
    let controller = cursor.read_string()?;

    let hash = cursor.read_string()?;
    let song_name = cursor.read_string()?;
    let mapper = cursor.read_string()?;
    let difficulty = cursor.read_string()?;

    let score = cursor.read_i32()?;
    let mode = cursor.read_string()?;
    let environment = cursor.read_string()?;
    let modifiers = split_modifiers(&cursor.read_string()?)?;
    let jump_distance = cursor.read_f32()?;
    let left_handed = cursor.read_bool()?;
    let height = cursor.read_f32()?;

    let start_time = cursor.read_f32()?;
    let fail_time = cursor.read_f32()?;
    let speed = cursor.read_f32()?;

    Ok(Info {
        version,
        game_version,
        timestamp,
        player_id,
        player_name,
        platform,
        tracking_system,
        hmd,
        controller,
        hash,
        song_name,
        mapper,
        difficulty,
        score,
        mode,
        environment,
        modifiers,
        jump_distance,
        left_handed,
        height,
        start_time,
        fail_time,
        speed,
    })
}

fn decode_pose(cursor: &mut ByteCursor) -> Result<Pose> {
    let position = cursor.read_vector3()?;
    let rotation = cursor.read_quaternion()?;
    Ok(Pose { position, rotation })
}

fn decode_frame(cursor: &mut ByteCursor) -> Result<Frame> {
    Ok(Frame {
        time: cursor.read_f32()?,
        fps: cursor.read_i32()?,
        head: decode_pose(cursor)?,
        left_hand: decode_pose(cursor)?,
        right_hand: decode_pose(cursor)?,
    })
}

/// Notes have no fixed stride: cut info follows only Good and Bad events.
fn decode_note(cursor: &mut ByteCursor) -> Result<NoteEvent> {
    let note_id = NoteId(cursor.read_i32()?);
    let event_time = cursor.read_f32()?;
    let spawn_time = cursor.read_f32()?;
    let code = cursor.read_i32()?;

    let event_type = NoteEventType::from_code(code);
    let cut = match event_type {
        Some(t) if t.has_cut_info() => Some(decode_cut_info(cursor)?),
        _ => None,
    };

    let kind = match (event_type, cut) {
        (Some(NoteEventType::Good), Some(cut)) => NoteEventKind::Good(cut),
        (Some(NoteEventType::Bad), Some(cut)) => NoteEventKind::Bad(cut),
        (Some(NoteEventType::Miss), _) => NoteEventKind::Miss,
        (Some(NoteEventType::Bomb), _) => NoteEventKind::Bomb,
        _ => NoteEventKind::Unknown(code),
    };

    Ok(NoteEvent {
        note_id,
        event_time,
        spawn_time,
        kind,
    })
}

fn decode_cut_info(cursor: &mut ByteCursor) -> Result<CutInfo> {
    Ok(CutInfo {
        speed_ok: cursor.read_bool()?,
        direction_ok: cursor.read_bool()?,
        saber_type_ok: cursor.read_bool()?,
        was_cut_too_soon: cursor.read_bool()?,
        saber_speed: cursor.read_f32()?,
        saber_dir: cursor.read_vector3()?,
        saber_type: cursor.read_i32()?,
        time_deviation: cursor.read_f32()?,
        cut_dir_deviation: cursor.read_f32()?,
        cut_point: cursor.read_vector3()?,
        cut_normal: cursor.read_vector3()?,
        cut_distance_to_center: cursor.read_f32()?,
        cut_angle: cursor.read_f32()?,
        before_cut_rating: cursor.read_f32()?,
        after_cut_rating: cursor.read_f32()?,
    })
}

fn decode_wall(cursor: &mut ByteCursor) -> Result<WallEvent> {
    Ok(WallEvent {
        wall_id: WallId(cursor.read_i32()?),
        energy: cursor.read_f32()?,
        time: cursor.read_f32()?,
        spawn_time: cursor.read_f32()?,
    })
}

fn decode_height(cursor: &mut ByteCursor) -> Result<HeightEvent> {
    Ok(HeightEvent {
        height: cursor.read_f32()?,
        time: cursor.read_f32()?,
    })
}

fn decode_pause(cursor: &mut ByteCursor) -> Result<PauseEvent> {
    Ok(PauseEvent {
        duration: cursor.read_i64()?,
        time: cursor.read_f32()?,
    })
}
