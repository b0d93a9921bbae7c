//! Audio backed by a dedicated thread owning the Raylib audio device.
//!
//! [`audio_thread`] processes [`AudioCmd`] messages and reports back with
//! [`AudioMessage`]; the bridge systems below move messages between the ECS
//! mailboxes and the crossbeam channels each frame. Keeping every Raylib
//! audio call on one thread sidesteps the library's thread-affinity rules,
//! and music streaming gets its required periodic pump inside the loop.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending audio-thread notifications into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the `Messages<AudioMessage>` queue once per frame.
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward queued [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the `Messages<AudioCmd>` queue once per frame.
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns all `Music` and `Sound` handles, reacts to [`AudioCmd`] inputs, and
/// pumps music streams while they play. Blocks until [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    info!("audio thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("music loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        error!("music load failed id='{}' path='{}': {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("music play id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::VolumeMusic { id, vol } => {
                    if let Some(music) = musics.get(&id) {
                        music.set_volume(vol);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        error!("fx load failed id='{}' path='{}': {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        debug!("fx play id='{}'", id);
                        sound.play();
                    } else {
                        error!("fx play failed id='{}': not loaded", id);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("audio shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    sounds.clear();
                    break 'run;
                }
            }
        }

        // Pump streaming and detect track ends. update_stream() must be
        // called regularly while a track plays; a finished non-looped track
        // reports Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    debug!("restarting looped music id='{}'", id);
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                debug!("music finished id='{}'", id);
                playing.remove(id);
                let _ = tx_msg.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!("audio thread exiting (id={:?})", std::thread::current().id());

    // musics and sounds drop before `audio`, satisfying handle lifetimes
}
