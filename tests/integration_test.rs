use game_matcher::{
    batch_match_games, cosine_similarity, get_default_config, jaccard_similarity,
    levenshtein_similarity, match_games, validate_config, AlgorithmWeights, Candidate,
    ConfigOverride, Field, FieldWeights, MatchError, MatchingEngine,
};
use std::time::{Duration, Instant};

fn library() -> Vec<Candidate> {
    vec![
        Candidate::new("1", "Super Mario Bros")
            .with_description("Classic side-scrolling platformer starring Mario")
            .with_tags(["platformer", "nintendo", "mario"]),
        Candidate::new("2", "Super Mario World")
            .with_description("Mario explores Dinosaur Land")
            .with_tags(["platformer", "nintendo"]),
        Candidate::new("3", "Tetris")
            .with_description("Falling block puzzle game")
            .with_tags(["puzzle", "classic"]),
        Candidate::new("4", "The Legend of Zelda"),
        Candidate::new("5", "塞尔达传说 旷野之息").with_tags(["开放世界"]),
    ]
}

#[test]
fn test_similarity_properties() {
    for text in ["", "a", "Super Mario Bros", "塞尔达传说"] {
        assert_eq!(levenshtein_similarity(text, text), 1.0);
        assert_eq!(jaccard_similarity(text, text), 1.0);
        if !text.is_empty() {
            assert_eq!(cosine_similarity(text, text), 1.0);
        }
    }

    assert_eq!(jaccard_similarity("", ""), 1.0);
    assert_eq!(cosine_similarity("", "x"), 0.0);
    assert_eq!(levenshtein_similarity("", "x"), 0.0);
    assert_eq!(cosine_similarity("hello world", "world hello"), 1.0);
}

#[test]
fn test_exact_title_match() {
    let games = vec![Candidate::new("1", "Super Mario Bros")];
    let matches = match_games("Super Mario Bros", &games, None).unwrap();

    assert_eq!(matches.len(), 1);
    assert!((matches[0].similarity - 1.0).abs() < 0.01);
    assert!(matches[0].is_exact());
    assert_eq!(matches[0].game, games[0]);
}

#[test]
fn test_partial_query_ranks_both_marios() {
    let games = vec![
        Candidate::new("1", "Super Mario Bros"),
        Candidate::new("2", "Super Mario World"),
        Candidate::new("3", "Tetris"),
    ];
    let threshold = get_default_config().threshold;

    let matches = match_games("Mario", &games, None).unwrap();

    assert_eq!(matches.len(), 2);
    assert!(matches.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    assert!(matches.iter().all(|m| m.similarity >= threshold));
    assert_eq!(matches[0].game.id, "1");
}

#[test]
fn test_degenerate_inputs_return_empty() {
    assert!(match_games("", &library(), None).unwrap().is_empty());
    assert!(match_games("   ", &library(), None).unwrap().is_empty());
    assert!(match_games("query", &[], None).unwrap().is_empty());

    let no_queries: Vec<String> = Vec::new();
    assert!(batch_match_games(&no_queries, &library(), None).unwrap().is_empty());
}

#[test]
fn test_default_config_invariants() {
    let config = get_default_config();
    let weights = config.weights.title + config.weights.description + config.weights.tags;
    let algorithms = config.algorithm_weights.levenshtein
        + config.algorithm_weights.cosine
        + config.algorithm_weights.jaccard;

    assert!((weights - 1.0).abs() <= 0.001);
    assert!((algorithms - 1.0).abs() <= 0.001);
    assert!(validate_config(&config.into()));
}

#[test]
fn test_validate_config() {
    assert!(!validate_config(&ConfigOverride::new().with_threshold(1.5)));
    assert!(!validate_config(&ConfigOverride::new().with_max_results(0)));
    assert!(!validate_config(&ConfigOverride::new().with_weights(FieldWeights {
        title: 0.5,
        description: 0.3,
        tags: 0.3,
    })));
    assert!(!validate_config(&ConfigOverride::new().with_weights(FieldWeights {
        title: 1.1,
        description: -0.1,
        tags: 0.0,
    })));

    assert!(validate_config(
        &ConfigOverride::new()
            .with_threshold(0.5)
            .with_max_results(25)
            .with_weights(FieldWeights {
                title: 0.5,
                description: 0.3,
                tags: 0.2,
            })
            .with_algorithm_weights(AlgorithmWeights {
                levenshtein: 0.2,
                cosine: 0.4,
                jaccard: 0.4,
            })
    ));
}

#[test]
fn test_invalid_override_is_an_error() {
    let invalid = ConfigOverride::new().with_max_results(500);

    assert!(matches!(
        match_games("mario", &library(), Some(&invalid)),
        Err(MatchError::Configuration(_))
    ));
    assert!(matches!(
        batch_match_games(&["mario"], &library(), Some(&invalid)),
        Err(MatchError::Configuration(_))
    ));
}

#[test]
fn test_batch_keys() {
    let batch = batch_match_games(&["Mario", "Tetris"], &library(), None).unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.queries().collect::<Vec<_>>(), vec!["Mario", "Tetris"]);
    assert!(!batch.get("Mario").unwrap().is_empty());
    assert_eq!(batch.get("Tetris").unwrap()[0].game.id, "3");
}

#[test]
fn test_batch_keeps_queries_without_matches() {
    let batch = batch_match_games(&["Mario", "qqqqqqqq"], &library(), None).unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.get("qqqqqqqq"), Some(&[][..]));
}

#[test]
fn test_missing_fields_absent_and_not_penalized() {
    let games = vec![Candidate::new("4", "The Legend of Zelda")];
    let matches = match_games("The Legend of Zelda", &games, None).unwrap();

    let m = &matches[0];
    assert!(m.matched_fields.description.is_none());
    assert!(m.matched_fields.tags.is_none());
    assert_eq!(m.matched_fields.title, m.similarity);
    assert!((m.similarity - 1.0).abs() < 1e-9);
    assert_eq!(m.best_field, Field::Title);
}

#[test]
fn test_present_fields_reported() {
    let matches = match_games("super mario bros", &library(), None).unwrap();
    let m = &matches[0];

    assert_eq!(m.game.id, "1");
    assert!(m.matched_fields.description.is_some());
    assert!(m.matched_fields.tags.is_some());
    // Description and tags pull the aggregate below the perfect title
    assert!(m.similarity < m.matched_fields.title);
}

#[test]
fn test_case_sensitivity() {
    let games = vec![Candidate::new("1", "TETRIS")];

    let insensitive = match_games("tetris", &games, None).unwrap();
    assert!((insensitive[0].similarity - 1.0).abs() < 1e-9);

    let sensitive = ConfigOverride::new().with_case_sensitive(true);
    assert!(match_games("tetris", &games, Some(&sensitive)).unwrap().is_empty());
}

#[test]
fn test_exact_mode() {
    let exact = ConfigOverride::new().with_fuzzy_match(false);

    assert!(match_games("mario", &library(), Some(&exact)).unwrap().is_empty());

    let matches = match_games("tetris", &library(), Some(&exact)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].game.id, "3");

    // A tag hit alone: tags weight over the present-field total
    let by_tag = match_games("nintendo", &library(), Some(&exact.with_threshold(0.1))).unwrap();
    assert_eq!(by_tag.len(), 2);
    assert!(by_tag.iter().all(|m| m.best_field == Field::Tags));
}

#[test]
fn test_cjk_phrases() {
    let only_title = ConfigOverride::new().with_weights(FieldWeights {
        title: 1.0,
        description: 0.0,
        tags: 0.0,
    });

    let matches = match_games("塞尔达传说 旷野之息", &library(), Some(&only_title)).unwrap();
    assert_eq!(matches[0].game.id, "5");
    assert!((matches[0].similarity - 1.0).abs() < 1e-9);

    assert_eq!(cosine_similarity("塞尔达传说", "超级马里奥"), 0.0);
    assert_eq!(jaccard_similarity("塞尔达传说", "超级马里奥"), 0.0);
}

#[test]
fn test_ties_keep_input_order() {
    let games = vec![
        Candidate::new("a", "Doom"),
        Candidate::new("b", "Doom"),
        Candidate::new("c", "Doom"),
    ];

    let matches = match_games("doom", &games, None).unwrap();
    let ids: Vec<&str> = matches.iter().map(|m| m.game.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_candidates_untouched() {
    let games = library();
    let before = games.clone();

    let _ = match_games("mario", &games, None).unwrap();
    let _ = batch_match_games(&["zelda", "tetris"], &games, None).unwrap();

    assert_eq!(games, before);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = std::sync::Arc::new(MatchingEngine::default());
    let games = std::sync::Arc::new(library());

    let handles: Vec<_> = ["mario", "tetris", "zelda"]
        .into_iter()
        .map(|query| {
            let engine = engine.clone();
            let games = games.clone();
            std::thread::spawn(move || engine.match_games(query, &games).len())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() >= 1);
    }
}

#[test]
fn test_thousand_candidates_performance() {
    let games: Vec<Candidate> = (0..1000)
        .map(|i| {
            Candidate::new(i.to_string(), format!("Game Title Number {}", i))
                .with_description(format!("A synthetic description for entry {}", i))
                .with_tags(["synthetic", "test"])
        })
        .collect();
    let config = ConfigOverride::new().with_max_results(10);

    let start = Instant::now();
    let matches = match_games("Game Title Number 500", &games, Some(&config)).unwrap();
    let elapsed = start.elapsed();

    assert!(matches.len() <= 10);
    assert_eq!(matches[0].game.id, "500");
    assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);
}

#[test]
fn test_results_serialize_for_callers() {
    let batch = batch_match_games(&["tetris"], &library(), None).unwrap();
    let json = serde_json::to_value(&batch).unwrap();

    let first = &json["tetris"][0];
    assert_eq!(first["game"]["title"], "Tetris");
    assert!(first["matchedFields"]["title"].is_number());
    assert!(first["scores"]["normalized"].is_number());
}
