use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayHeader {
    pub magic_number: u32,
    pub file_version: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub version: String,
    pub game_version: String,
    /// Unix time in seconds, as written by the recorder.
    pub timestamp: String,

    pub player_id: String,
    pub player_name: String,
    pub platform: String,

    pub tracking_system: String,
    pub hmd: String,
    pub controller: String,

    pub hash: String,
    pub song_name: String,
    pub mapper: String,
    pub difficulty: String,

    pub score: i32,
    pub mode: String,
    pub environment: String,
    /// Modifier codes (`FS`, `GN`, ...) in recorded order, empty entries dropped.
    pub modifiers: Vec<String>,
    pub jump_distance: f32,
    pub left_handed: bool,
    pub height: f32,

    pub start_time: f32,
    pub fail_time: f32,
    pub speed: f32,
}

impl Info {
    pub fn timestamp_secs(&self) -> Option<u64> {
        self.timestamp.trim().parse().ok()
    }

    pub fn has_modifier(&self, code: &str) -> bool {
        self.modifiers.iter().any(|m| m == code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3,
    pub rotation: Quaternion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub time: f32,
    pub fps: i32,
    pub head: Pose,
    pub left_hand: Pose,
    pub right_hand: Pose,
}

/// Packed note identifier:
/// `scoringType*10000 + lineIndex*1000 + noteLineLayer*100 + colorType*10 + cutDirection`.
///
/// The decoder stores it as written; the accessors only split the decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i32);

impl NoteId {
    /// Scoring type as recorded, i.e. the game value plus 2
    /// (NoScore = 2, Normal = 3, SliderHead = 4, SliderTail = 5,
    /// BurstSliderHead = 6, BurstSliderElement = 7).
    pub fn scoring_type(self) -> i32 {
        self.0 / 10000
    }

    pub fn line_index(self) -> i32 {
        self.0 / 1000 % 10
    }

    pub fn line_layer(self) -> i32 {
        self.0 / 100 % 10
    }

    pub fn color_type(self) -> i32 {
        self.0 / 10 % 10
    }

    pub fn cut_direction(self) -> i32 {
        self.0 % 10
    }
}

/// Packed wall identifier: `lineIndex*100 + obstacleType*10 + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(pub i32);

impl WallId {
    pub fn line_index(self) -> i32 {
        self.0 / 100
    }

    pub fn obstacle_type(self) -> i32 {
        self.0 / 10 % 10
    }

    pub fn width(self) -> i32 {
        self.0 % 10
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteEventType {
    Good = 0,
    Bad = 1,
    Miss = 2,
    Bomb = 3,
}

impl NoteEventType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Good),
            1 => Some(Self::Bad),
            2 => Some(Self::Miss),
            3 => Some(Self::Bomb),
            _ => None,
        }
    }

    /// Only swung-at notes carry cut info on the wire.
    pub fn has_cut_info(self) -> bool {
        matches!(self, Self::Good | Self::Bad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutInfo {
    pub speed_ok: bool,
    pub direction_ok: bool,
    pub saber_type_ok: bool,
    pub was_cut_too_soon: bool,
    pub saber_speed: f32,
    pub saber_dir: Vector3,
    pub saber_type: i32,
    pub time_deviation: f32,
    pub cut_dir_deviation: f32,
    pub cut_point: Vector3,
    pub cut_normal: Vector3,
    pub cut_distance_to_center: f32,
    pub cut_angle: f32,
    pub before_cut_rating: f32,
    pub after_cut_rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NoteEventKind {
    Good(CutInfo),
    Bad(CutInfo),
    Miss,
    Bomb,
    /// Event type code outside 0..=3. Carries no cut info.
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub note_id: NoteId,
    pub event_time: f32,
    pub spawn_time: f32,
    pub kind: NoteEventKind,
}

impl NoteEvent {
    /// Event type exactly as it appeared on the wire.
    pub fn event_type_code(&self) -> i32 {
        match self.kind {
            NoteEventKind::Good(_) => NoteEventType::Good as i32,
            NoteEventKind::Bad(_) => NoteEventType::Bad as i32,
            NoteEventKind::Miss => NoteEventType::Miss as i32,
            NoteEventKind::Bomb => NoteEventType::Bomb as i32,
            NoteEventKind::Unknown(code) => code,
        }
    }

    pub fn event_type(&self) -> Option<NoteEventType> {
        NoteEventType::from_code(self.event_type_code())
    }

    pub fn cut_info(&self) -> Option<&CutInfo> {
        match &self.kind {
            NoteEventKind::Good(cut) | NoteEventKind::Bad(cut) => Some(cut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallEvent {
    pub wall_id: WallId,
    /// Player energy at the end of the collision.
    pub energy: f32,
    pub time: f32,
    pub spawn_time: f32,
}

/// Automatic height adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightEvent {
    pub height: f32,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseEvent {
    /// Seconds.
    pub duration: i64,
    pub time: f32,
}

/// A fully decoded replay. Each `*_count` mirrors the count written on the
/// wire and always equals the length of its sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub header: ReplayHeader,
    pub info: Info,
    pub frame_count: u32,
    pub frames: Vec<Frame>,
    pub note_count: u32,
    pub notes: Vec<NoteEvent>,
    pub wall_count: u32,
    pub walls: Vec<WallEvent>,
    pub height_count: u32,
    pub heights: Vec<HeightEvent>,
    pub pause_count: u32,
    pub pauses: Vec<PauseEvent>,
}
