//! End-to-end deliveries of Sonarr payloads through `SonarrTriggers`.

use std::sync::{Arc, Mutex};

use arrhook_adapter_sonarr::{
    ApplicationUpdateEvent, DownloadEvent, EpisodeFileDeleteEvent, EpisodesEvent, GrabEvent,
    HealthEvent, RenameEvent, SeriesDeleteEvent, SeriesEvent, SonarrEventType, SonarrTriggers,
    TestEvent,
};
use arrhook_core::{ErrorKind, UnknownEvent, WebhookEvent};
use serde_json::json;
use time::macros::datetime;

const GRAB: &str = r#"{
  "series": {
    "id": 12,
    "title": "The Expanse",
    "path": "/tv/The Expanse",
    "tvdbId": 280619,
    "tvMazeId": 1825,
    "imdbId": "tt3230854",
    "type": "standard"
  },
  "episodes": [
    {
      "id": 401,
      "episodeNumber": 5,
      "seasonNumber": 6,
      "title": "Why We Fight",
      "airDate": "2022-01-07",
      "airDateUtc": "2022-01-07T08:00:00Z"
    }
  ],
  "release": {
    "quality": "WEBDL-1080p",
    "qualityVersion": 1,
    "releaseGroup": "NTb",
    "releaseTitle": "The.Expanse.S06E05.1080p.WEB.H264-NTb",
    "indexer": "NZBgeek",
    "size": 2147483648
  },
  "downloadClient": "SABnzbd",
  "downloadClientType": "SABnzbd",
  "downloadId": "SABnzbd_nzo_p8v5xq",
  "eventType": "Grab"
}"#;

const DOWNLOAD: &str = r#"{
  "series": {"id": 12, "title": "The Expanse", "path": "/tv/The Expanse", "tvdbId": 280619, "type": "standard"},
  "episodes": [{"id": 401, "episodeNumber": 5, "seasonNumber": 6, "title": "Why We Fight"}],
  "episodeFile": {
    "id": 977,
    "relativePath": "Season 06/The Expanse - S06E05 - Why We Fight WEBDL-1080p.mkv",
    "path": "/downloads/complete/The.Expanse.S06E05.1080p.WEB.H264-NTb/ntb-expanse605.mkv",
    "quality": "WEBDL-1080p",
    "qualityVersion": 1,
    "releaseGroup": "NTb",
    "sceneName": "The.Expanse.S06E05.1080p.WEB.H264-NTb",
    "size": 2147483648
  },
  "isUpgrade": true,
  "downloadClient": "SABnzbd",
  "downloadId": "SABnzbd_nzo_p8v5xq",
  "eventType": "Download"
}"#;

const RENAME: &str = r#"{
  "series": {"id": 3, "title": "Dark", "path": "/tv/Dark", "tvdbId": 334824, "type": "standard"},
  "renamedEpisodeFiles": [
    {
      "previousRelativePath": "Season 1/dark.s01e01.mkv",
      "previousPath": "/tv/Dark/Season 1/dark.s01e01.mkv",
      "id": 55,
      "relativePath": "Season 01/Dark - S01E01 - Secrets Bluray-1080p.mkv",
      "path": "/tv/Dark/Season 01/Dark - S01E01 - Secrets Bluray-1080p.mkv",
      "quality": "Bluray-1080p",
      "qualityVersion": 1,
      "releaseGroup": null,
      "sceneName": null,
      "size": 4294967296
    }
  ],
  "eventType": "Rename"
}"#;

const EPISODE_FILE_DELETE: &str = r#"{
  "series": {"id": 3, "title": "Dark", "path": "/tv/Dark", "tvdbId": 334824, "type": "standard"},
  "episodes": [{"id": 88, "episodeNumber": 1, "seasonNumber": 1, "title": "Secrets", "airDate": "2017-12-01", "airDateUtc": "2017-12-01T08:00:00Z"}],
  "episodeFile": {
    "seriesId": 3,
    "seasonNumber": 1,
    "relativePath": "Season 01/Dark - S01E01 - Secrets HDTV-720p.mkv",
    "path": "/tv/Dark/Season 01/Dark - S01E01 - Secrets HDTV-720p.mkv",
    "size": 1073741824,
    "dateAdded": "2020-06-14T19:03:11.4825961Z",
    "releaseGroup": "LOL",
    "quality": {
      "quality": {"id": 4, "name": "HDTV-720p", "source": "television", "resolution": 720},
      "revision": {"version": 1, "real": 0, "isRepack": false}
    },
    "mediaInfo": {
      "containerFormat": "Matroska",
      "videoFormat": "AVC",
      "videoCodecID": "V_MPEG4/ISO/AVC",
      "videoBitrate": 3500000,
      "videoBitDepth": 8,
      "width": 1280,
      "height": 720,
      "audioFormat": "AAC",
      "audioCodecID": "A_AAC-2",
      "audioChannelsContainer": 2,
      "runTime": "00:51:37.1200000",
      "videoFps": 25.0,
      "audioLanguages": "German/English",
      "subtitles": "English",
      "scanType": "Progressive",
      "schemaRevision": 5
    },
    "episodes": {
      "value": [
        {
          "seriesId": 3,
          "tvdbId": 6316967,
          "episodeFileId": 55,
          "seasonNumber": 1,
          "episodeNumber": 1,
          "title": "Secrets",
          "airDate": "2017-12-01",
          "airDateUtc": "2017-12-01T08:00:00Z",
          "overview": "In 2019, a local boy's disappearance stokes fear.",
          "monitored": true,
          "absoluteEpisodeNumber": 1,
          "unverifiedSceneNumbering": false,
          "ratings": {"votes": 120, "value": 8.4},
          "images": [{"coverType": "screenshot", "url": "https://artworks.thetvdb.com/banners/episodes/334824/6316967.jpg"}],
          "episodeFile": {"isLoaded": false},
          "hasFile": true,
          "id": 88
        }
      ],
      "isLoaded": true
    },
    "series": {
      "value": {
        "tvdbId": 334824,
        "tvRageId": 0,
        "tvMazeId": 17861,
        "imdbId": "tt5753856",
        "title": "Dark",
        "cleanTitle": "dark",
        "sortTitle": "dark",
        "status": "ended",
        "overview": "A family saga with a supernatural twist.",
        "airTime": "03:00",
        "monitored": true,
        "qualityProfileId": 4,
        "languageProfileId": 1,
        "seasonFolder": true,
        "lastInfoSync": "2022-03-01T10:00:00Z",
        "runtime": 60,
        "images": [{"coverType": "poster", "url": "https://artworks.thetvdb.com/banners/posters/334824-1.jpg"}],
        "seriesType": "standard",
        "network": "Netflix",
        "useSceneNumbering": false,
        "titleSlug": "dark",
        "path": "/tv/Dark",
        "year": 2017,
        "ratings": {"votes": 5000, "value": 8.7},
        "genres": ["Drama", "Mystery", "Science Fiction"],
        "actors": [{"name": "Louis Hofmann", "character": "Jonas Kahnwald", "images": []}],
        "certification": "TV-MA",
        "added": "2019-05-02T18:22:10Z",
        "firstAired": "2017-12-01T00:00:00Z",
        "qualityProfile": {
          "value": {
            "name": "HD-1080p",
            "upgradeAllowed": true,
            "cutoff": 7,
            "items": [{"quality": {"id": 7, "name": "Bluray-1080p", "source": "bluray", "resolution": 1080}, "items": [], "allowed": true}],
            "id": 4
          },
          "isLoaded": true
        },
        "languageProfile": {
          "value": {
            "name": "English",
            "languages": [{"language": {"id": 1, "name": "English"}, "allowed": true}],
            "upgradeAllowed": false,
            "cutoff": {"id": 1, "name": "English"},
            "id": 1
          },
          "isLoaded": true
        },
        "seasons": [{"seasonNumber": 1, "monitored": true, "images": []}],
        "tags": [2],
        "id": 3
      },
      "isLoaded": true
    },
    "language": {"id": 4, "name": "German"},
    "id": 55
  },
  "deleteReason": "upgrade",
  "eventType": "EpisodeFileDelete"
}"#;

const SERIES_DELETE: &str = r#"{
  "series": {"id": 9, "title": "Lost", "path": "/tv/Lost", "tvdbId": 73739, "tvMazeId": 123, "imdbId": "tt0411008", "type": "standard"},
  "deletedFiles": false,
  "eventType": "SeriesDelete"
}"#;

const HEALTH: &str = r#"{
  "level": "error",
  "message": "No download client is available",
  "type": "DownloadClientCheck",
  "wikiUrl": "https://wiki.servarr.com/sonarr/system#no-download-client-is-available",
  "eventType": "Health"
}"#;

const APPLICATION_UPDATE: &str = r#"{
  "message": "Sonarr updated from 3.0.9.1549 to 3.0.10.1567",
  "previousVersion": "3.0.9.1549",
  "newVersion": "3.0.10.1567",
  "eventType": "ApplicationUpdate"
}"#;

const TEST: &str = r#"{
  "series": {"id": 1, "title": "Test Title", "path": "C:\\testpath", "tvdbId": 1234, "tvMazeId": 0, "type": "standard"},
  "episodes": [{"id": 123, "episodeNumber": 1, "seasonNumber": 1, "title": "Test title"}],
  "eventType": "Test"
}"#;

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&seen);
    (seen, move |value| record.lock().unwrap().push(value))
}

fn fixture(kind: SonarrEventType) -> &'static str {
    match kind {
        SonarrEventType::Grab => GRAB,
        SonarrEventType::Download => DOWNLOAD,
        SonarrEventType::Rename => RENAME,
        SonarrEventType::EpisodeFileDelete => EPISODE_FILE_DELETE,
        SonarrEventType::SeriesDelete => SERIES_DELETE,
        SonarrEventType::Health => HEALTH,
        SonarrEventType::ApplicationUpdate => APPLICATION_UPDATE,
        SonarrEventType::Test => TEST,
    }
}

#[test]
fn test_grab_delivered() {
    let (seen, handler) = recorder::<GrabEvent>();
    let dispatcher = SonarrTriggers::new().on_grab(handler).build();

    assert_eq!(dispatcher.receive(Ok(GRAB.as_bytes())), 200);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let event = &seen[0];
    assert_eq!(event.event_name(), "Grab");
    assert_eq!(event.event_type, "Grab");
    assert_eq!(event.series.imdb_id.as_deref(), Some("tt3230854"));
    assert_eq!(event.release.size, 2_147_483_648);
    assert_eq!(event.release.release_group.as_deref(), Some("NTb"));
    assert_eq!(event.download_id.as_deref(), Some("SABnzbd_nzo_p8v5xq"));
    assert_eq!(event.episodes[0].air_date_utc, Some(datetime!(2022-01-07 08:00:00 UTC)));
    assert_eq!(event.episode_codes(), "S06E05");
}

#[test]
fn test_download_delivered() {
    let (seen, handler) = recorder::<DownloadEvent>();
    let dispatcher = SonarrTriggers::new().on_download(handler).build();

    assert_eq!(dispatcher.receive(Ok(DOWNLOAD.as_bytes())), 200);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_upgrade);
    assert_eq!(seen[0].episode_file.id, 977);
    assert_eq!(seen[0].download_client_type, None);
    assert_eq!(seen[0].series_title(), "The Expanse");
}

#[test]
fn test_rename_accepts_null_strings() {
    let (seen, handler) = recorder::<RenameEvent>();
    let dispatcher = SonarrTriggers::new().on_rename(handler).build();

    assert_eq!(dispatcher.receive(Ok(RENAME.as_bytes())), 200);

    let seen = seen.lock().unwrap();
    let file = &seen[0].renamed_episode_files[0];
    assert_eq!(file.previous_relative_path, "Season 1/dark.s01e01.mkv");
    assert_eq!(file.release_group, None);
    assert_eq!(file.scene_name, None);
}

#[test]
fn test_null_fields_decode_as_defaults() {
    let (seen, handler) = recorder::<GrabEvent>();
    let dispatcher = SonarrTriggers::new().on_grab(handler).build();

    let body = json!({
        "eventType": "Grab",
        "series": {"id": 3, "title": null, "path": null, "tvdbId": null},
        "episodes": [{"episodeNumber": 1, "seasonNumber": 2, "title": null}],
        "release": {"releaseTitle": null, "size": null, "indexer": null},
        "downloadClient": null,
        "downloadClientType": null
    });
    assert_eq!(dispatcher.receive(Ok(body.to_string().as_bytes())), 200);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let event = &seen[0];
    assert_eq!(event.series.id, 3);
    assert_eq!(event.series_title(), "");
    assert_eq!(event.series.tvdb_id, 0);
    assert_eq!(event.episode_codes(), "S02E01");
    assert_eq!(event.release.size, 0);
    assert_eq!(event.download_client, "");
    assert_eq!(event.download_client_type, "");
}

#[test]
fn test_null_media_info_and_collections() {
    let (seen, handler) = recorder::<EpisodeFileDeleteEvent>();
    let dispatcher = SonarrTriggers::new().on_episode_file_delete(handler).build();

    let body = json!({
        "eventType": "EpisodeFileDelete",
        "series": null,
        "episodes": null,
        "deleteReason": null,
        "episodeFile": {
            "relativePath": null,
            "mediaInfo": {"videoCodecID": null, "audioLanguages": null, "width": null},
            "quality": {"quality": {"name": null}, "revision": null}
        }
    });
    assert_eq!(dispatcher.receive(Ok(body.to_string().as_bytes())), 200);

    let seen = seen.lock().unwrap();
    let event = &seen[0];
    assert!(event.episodes.is_empty());
    assert_eq!(event.delete_reason, "");
    assert_eq!(event.episode_file.media_info.video_codec_id, "");
    assert_eq!(event.episode_file.media_info.width, 0);
    assert_eq!(event.episode_file.quality.revision.version, 0);
}

#[test]
fn test_episode_file_delete_carries_detail() {
    let (seen, handler) = recorder::<EpisodeFileDeleteEvent>();
    let dispatcher = SonarrTriggers::new().on_episode_file_delete(handler).build();

    assert_eq!(dispatcher.receive(Ok(EPISODE_FILE_DELETE.as_bytes())), 200);

    let seen = seen.lock().unwrap();
    let event = &seen[0];
    assert_eq!(event.delete_reason, "upgrade");

    let file = &event.episode_file;
    assert_eq!(file.quality.quality.resolution, 720);
    assert_eq!(file.media_info.video_codec_id, "V_MPEG4/ISO/AVC");
    assert_eq!(file.language.name, "German");
    assert_eq!(file.date_added.map(|d| d.year()), Some(2020));

    let episodes = file.episodes.get().unwrap();
    assert_eq!(episodes[0].absolute_episode_number, Some(1));
    assert_eq!(episodes[0].scene_season_number, None);
    assert!(episodes[0].episode_file.get().is_none());

    let series = file.series.get().unwrap();
    assert_eq!(series.network.as_deref(), Some("Netflix"));
    assert_eq!(series.genres.len(), 3);
    assert_eq!(series.quality_profile.get().map(|p| p.cutoff), Some(7));
    assert_eq!(
        series.language_profile.get().map(|p| p.cutoff.name.as_str()),
        Some("English")
    );
}

#[test]
fn test_series_delete_health_and_update_delivered() {
    let (series_deletes, on_series_delete) = recorder::<SeriesDeleteEvent>();
    let (health, on_health) = recorder::<HealthEvent>();
    let (updates, on_update) = recorder::<ApplicationUpdateEvent>();
    let dispatcher = SonarrTriggers::new()
        .on_series_delete(on_series_delete)
        .on_health(on_health)
        .on_application_update(on_update)
        .build();

    for payload in [SERIES_DELETE, HEALTH, APPLICATION_UPDATE] {
        assert_eq!(dispatcher.receive(Ok(payload.as_bytes())), 200);
    }

    assert_eq!(series_deletes.lock().unwrap()[0].series.tvdb_id, 73739);
    assert!(!series_deletes.lock().unwrap()[0].deleted_files);
    assert_eq!(health.lock().unwrap()[0].check_type, "DownloadClientCheck");
    assert_eq!(updates.lock().unwrap()[0].new_version, "3.0.10.1567");
}

#[test]
fn test_each_kind_reaches_only_its_handler() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = |kind: &'static str| {
        let calls = Arc::clone(&calls);
        move || calls.lock().unwrap().push(kind)
    };

    let grab = log("Grab");
    let download = log("Download");
    let rename = log("Rename");
    let delete = log("EpisodeFileDelete");
    let series = log("SeriesDelete");
    let health = log("Health");
    let update = log("ApplicationUpdate");
    let test = log("Test");
    let unknown = log("Unknown");
    let dispatcher = SonarrTriggers::new()
        .on_grab(move |_| grab())
        .on_download(move |_| download())
        .on_rename(move |_| rename())
        .on_episode_file_delete(move |_| delete())
        .on_series_delete(move |_| series())
        .on_health(move |_| health())
        .on_application_update(move |_| update())
        .on_test(move |_| test())
        .on_unknown(move |_, _| unknown())
        .build();

    for kind in SonarrEventType::ALL {
        calls.lock().unwrap().clear();
        assert_eq!(dispatcher.receive(Ok(fixture(kind).as_bytes())), 200);
        assert_eq!(*calls.lock().unwrap(), [kind.as_str()]);
    }
}

#[test]
fn test_unsubscribed_kinds_are_accepted_without_decoding() {
    let (unknown, on_unknown) = recorder::<String>();
    let dispatcher = SonarrTriggers::new()
        .on_unknown(move |event_type, _| on_unknown(event_type.to_string()))
        .on_error(|_, _| 500)
        .build();

    for kind in SonarrEventType::ALL {
        // Every other field has the wrong shape for any variant.
        let body = json!({"eventType": kind.as_str(), "series": 1, "episodes": "x"});
        assert_eq!(dispatcher.receive(Ok(body.to_string().as_bytes())), 200);
    }
    assert!(unknown.lock().unwrap().is_empty());
}

#[test]
fn test_test_event_scenario() {
    let (seen, handler) = recorder::<TestEvent>();
    let dispatcher = SonarrTriggers::new().on_test(handler).build();

    assert_eq!(dispatcher.receive(Ok(br#"{"eventType":"Test"}"#)), 200);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].event_name(), "Test");
    assert!(seen[0].episodes.is_empty());
}

#[test]
fn test_real_test_payload() {
    let (seen, handler) = recorder::<TestEvent>();
    let dispatcher = SonarrTriggers::new().on_test(handler).build();

    assert_eq!(dispatcher.receive(Ok(TEST.as_bytes())), 200);
    assert_eq!(seen.lock().unwrap()[0].series.path, r"C:\testpath");
}

#[test]
fn test_future_kind_scenario() {
    let (seen, handler) = recorder::<(String, UnknownEvent)>();
    let dispatcher = SonarrTriggers::new()
        .on_unknown(move |event_type, event| handler((event_type.to_string(), event)))
        .build();

    assert_eq!(
        dispatcher.receive(Ok(br#"{"eventType":"FutureKind","foo":1}"#)),
        200
    );

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "FutureKind");
    assert_eq!(
        serde_json::to_value(&seen[0].1).unwrap(),
        json!({"foo": 1, "eventType": "FutureKind"})
    );
    let keys: Vec<_> = seen[0].1.keys().map(String::as_str).collect();
    assert_eq!(keys, ["eventType", "foo"]);
}

#[test]
fn test_renamed_upstream_kind_degrades_to_unknown() {
    let (seen, handler) = recorder::<String>();
    let dispatcher = SonarrTriggers::new()
        .on_download(|_| panic!("OnImport is not Download"))
        .on_unknown(move |event_type, _| handler(event_type.to_string()))
        .build();

    let body = DOWNLOAD.replace(r#""eventType": "Download""#, r#""eventType": "OnImport""#);
    assert_eq!(dispatcher.receive(Ok(body.as_bytes())), 200);
    assert_eq!(*seen.lock().unwrap(), ["OnImport"]);
}

#[test]
fn test_not_json_scenario() {
    let default = SonarrTriggers::new().on_test(|_| {}).build();
    assert_eq!(default.receive(Ok(b"not json")), 400);

    let (seen, handler) = recorder::<(Option<Vec<u8>>, ErrorKind)>();
    let custom = SonarrTriggers::new()
        .on_error(move |payload, err| {
            handler((payload.map(<[u8]>::to_vec), err.kind()));
            503
        })
        .build();
    assert_eq!(custom.receive(Ok(b"not json")), 503);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some(&b"not json"[..]));
    assert_eq!(seen[0].1, ErrorKind::EventType);
}

#[test]
fn test_grab_decode_failure_scenario() {
    let body = br#"{"eventType":"Grab","episodes":"not-an-array"}"#;
    let (errors, on_error) = recorder::<String>();
    let dispatcher = SonarrTriggers::new()
        .on_grab(|_| panic!("handler must not run for an invalid payload"))
        .on_unknown(|_, _| panic!("decode failures do not fall back"))
        .on_error(move |_, err| {
            on_error(err.to_string());
            422
        })
        .build();

    assert_eq!(dispatcher.receive(Ok(&body[..])), 422);

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("failed to handle 'Grab' event"), "{}", errors[0]);
    assert!(errors[0].contains("failed to decode 'Grab' event"), "{}", errors[0]);

    let default = SonarrTriggers::new().on_grab(|_| {}).build();
    assert_eq!(default.receive(Ok(&body[..])), 400);
}
