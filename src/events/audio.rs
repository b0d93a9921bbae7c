use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    VolumeMusic { id: String, vol: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Notifications sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicFinished { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
}
