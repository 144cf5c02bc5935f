//! Library state integration tests
//!
//! Exercises the manager the way the app drives it: a user browsing,
//! playing, and favoriting media over one session.

use streamify_core::types::{MediaId, MediaItem, Playlist, PlaylistId};
use streamify_library::{LibraryConfig, LibraryEvent, LibraryManager};

// ===== Test Helpers =====

fn create_item(id: &str, title: &str) -> MediaItem {
    MediaItem::new(
        MediaId::new(id),
        title,
        format!("Description for {title}"),
        format!("https://example.com/thumbs/{id}.jpg"),
    )
    .with_metadata("5:30", "Sample Channel", "1.2K views", "2 days ago")
}

fn ids(items: &[&MediaItem]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

// ===== Recently Played =====

#[test]
fn test_replay_moves_to_front_without_duplicate() {
    let mut library = LibraryManager::default();

    library.play(create_item("1", "Video 1"));
    library.play(create_item("2", "Video 2"));
    library.play(create_item("1", "Video 1"));

    let recents = library.recently_played();
    assert_eq!(ids(&recents), vec!["1", "2"]);

    let occurrences = recents.iter().filter(|i| i.id.as_str() == "1").count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_recents_bounded_at_twenty() {
    let mut library = LibraryManager::default();

    for i in 1..=25 {
        library.play(create_item(&i.to_string(), &format!("Video {i}")));
    }

    let recents = library.recently_played();
    assert_eq!(recents.len(), 20);

    // The 20 most recent survive, most recent first: 25, 24, ..., 6
    let expected: Vec<String> = (6..=25).rev().map(|i| i.to_string()).collect();
    assert_eq!(ids(&recents), expected);
}

#[test]
fn test_recents_bound_is_configurable() {
    let mut library = LibraryManager::new(LibraryConfig { recents_limit: 3 });

    for i in 1..=5 {
        library.play(create_item(&i.to_string(), &format!("Video {i}")));
    }

    assert_eq!(library.recents_limit(), 3);
    assert_eq!(ids(&library.recently_played()), vec!["5", "4", "3"]);
}

#[test]
fn test_empty_identifier_items_collide() {
    let mut library = LibraryManager::default();

    // Malformed ids are accepted; they simply match each other
    library.play(create_item("", "First Unnamed"));
    library.play(create_item("", "Second Unnamed"));

    let recents = library.recently_played();
    assert_eq!(recents.len(), 1);
    assert_eq!(recents[0].title, "Second Unnamed");
}

// ===== Favorites =====

#[test]
fn test_favorite_toggle_and_query() {
    let mut library = LibraryManager::default();
    let id = MediaId::new("5");

    library.toggle_favorite(create_item("5", "Video 5"));
    assert!(library.is_favorite(&id));

    library.toggle_favorite(create_item("5", "Video 5"));
    assert!(!library.is_favorite(&id));
}

#[test]
fn test_double_toggle_restores_prior_contents() {
    let mut library = LibraryManager::default();
    library.toggle_favorite(create_item("1", "Video 1"));
    library.toggle_favorite(create_item("2", "Video 2"));

    let before = ids(&library.favorites());
    library.toggle_favorite(create_item("3", "Video 3"));
    library.toggle_favorite(create_item("3", "Video 3"));

    assert_eq!(ids(&library.favorites()), before);
    assert_eq!(library.favorite_count(), 2);
}

#[test]
fn test_is_favorite_has_no_side_effects() {
    let mut library = LibraryManager::default();
    library.toggle_favorite(create_item("1", "Video 1"));
    library.drain_events();

    assert!(library.is_favorite(&MediaId::new("1")));
    assert!(!library.is_favorite(&MediaId::new("2")));
    assert!(!library.has_pending_events());
    assert_eq!(library.favorite_count(), 1);
}

// ===== Current Playlist =====

#[test]
fn test_current_playlist_lifecycle() {
    let mut library = LibraryManager::default();

    let mut playlist = Playlist::with_items(
        PlaylistId::new("playlist-1"),
        "Sample Playlist",
        vec![create_item("1", "Video 1"), create_item("2", "Video 2")],
        chrono::Utc::now(),
    );
    playlist.description = Some("A collection of sample videos".to_string());

    library.set_current_playlist(playlist);

    let current = library.current_playlist().unwrap();
    assert_eq!(current.name, "Sample Playlist");
    assert_eq!(current.len(), 2);

    let cleared = library.clear_current_playlist().unwrap();
    assert_eq!(cleared.id, PlaylistId::new("playlist-1"));
    assert!(library.current_playlist().is_none());
}

// ===== Events =====

#[test]
fn test_session_event_stream() {
    let mut library = LibraryManager::default();

    let item = create_item("1", "Video 1");
    library.play(item.clone());
    library.toggle_favorite(item);
    library.set_current_playlist(Playlist::with_items(
        PlaylistId::new("playlist-1"),
        "Mix",
        Vec::new(),
        chrono::Utc::now(),
    ));

    let events = library.drain_events();
    assert_eq!(
        events,
        vec![
            LibraryEvent::PlaybackRequested {
                media_id: MediaId::new("1")
            },
            LibraryEvent::RecentsChanged { length: 1 },
            LibraryEvent::FavoriteAdded {
                media_id: MediaId::new("1")
            },
            LibraryEvent::PlaylistChanged {
                playlist_id: Some(PlaylistId::new("playlist-1"))
            },
        ]
    );

    // Drained means drained
    assert!(library.drain_events().is_empty());
}
