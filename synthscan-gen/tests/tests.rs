#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::time::Duration;

    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use synthscan::entities::PageState;
    use synthscan::packing::{Augmenter, Measured, PageSink, TextRenderer};
    use synthscan::io::ext_repr::ExtPage;
    use synthscan_gen::config::{AugmentConfig, FontConfig, GenConfig, PageSize, StyleConfig};
    use synthscan_gen::eval::{
        OcrEngine, SequenceMatcher, TranscriptEngine, run_benchmark, word_accuracy,
    };
    use synthscan_gen::generate::{PAGES_FILE, generate};
    use synthscan_gen::io;
    use synthscan_gen::render::{
        Augmentation, FontMetrics, RandomAugmenter, SvgDrawOptions, SvgPageSink, TextImage,
        TextImageGenerator, WordStyle, load_fonts,
    };

    const SAMPLE_TEXTS: [&str; 6] = [
        "Janet's ducks lay 16 eggs per day.",
        "She eats three for breakfast every morning and bakes muffins for her friends every day with four.",
        "A robe takes 2 bolts of blue fiber and half that much white fiber.",
        "How many bolts in total does it take?",
        "Josh decides to try flipping a house. He buys a house for $80,000 and then puts in $50,000 in repairs.",
        "James decides to run 3 sprints 3 times a week.",
    ];

    fn plain_style() -> StyleConfig {
        StyleConfig {
            strikethrough_prob: 0.0,
            bold_prob: 0.0,
            uppercase_prob: 0.0,
            ..StyleConfig::default()
        }
    }

    fn no_fonts() -> FontConfig {
        FontConfig {
            font_paths: vec![],
            font_dirs: vec![],
        }
    }

    fn test_config() -> GenConfig {
        GenConfig {
            fonts: no_fonts(),
            ..GenConfig::default()
        }
    }

    #[test_case("the cat sat", "the cat sat", 100.0; "identical")]
    #[test_case("", "", 100.0; "both empty")]
    #[test_case("", "something", 0.0; "empty ground truth")]
    #[test_case("the cat sat", "", 0.0; "empty ocr")]
    #[test_case("Hello\nWorld", "hello   WORLD", 100.0; "normalization")]
    #[test_case("a b c d", "a b", 50.0; "half recovered")]
    #[test_case("a b c d", "c d a b", 50.0; "reordered")]
    #[test_case("the cat sat", "the big cat sat down", 100.0; "extra words")]
    fn word_accuracy_cases(ground_truth: &str, ocr_text: &str, expected: f64) {
        let accuracy = word_accuracy(ground_truth, ocr_text);
        assert!(approx_eq!(f64, accuracy, expected, epsilon = 1e-9), "{accuracy} != {expected}");
    }

    #[test]
    fn matching_blocks_are_merged_and_ordered() {
        let a = "abxcd".chars().collect::<Vec<_>>();
        let b = "abcd".chars().collect::<Vec<_>>();
        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
        let blocks = blocks.iter().map(|m| (m.a, m.b, m.size)).collect::<Vec<_>>();
        assert_eq!(blocks, vec![(0, 0, 2), (3, 2, 2)]);
    }

    #[test]
    fn longest_match_prefers_earliest_block() {
        let a = " abcd".chars().collect::<Vec<_>>();
        let b = "abcd abcd".chars().collect::<Vec<_>>();
        let m = SequenceMatcher::new(&a, &b).find_longest_match(0, 5, 0, 9);
        assert_eq!((m.a, m.b, m.size), (0, 4, 5));
    }

    #[test]
    fn popular_words_cannot_start_a_match() {
        let a = vec!["x", "the"];
        let short = vec!["the"; 199];
        let long = vec!["the"; 200];
        assert_eq!(SequenceMatcher::new(&a, &short).n_matched(), 1);
        assert_eq!(SequenceMatcher::new(&a, &long).n_matched(), 0);
    }

    #[test]
    fn layout_dimensions() {
        let mut rng = SmallRng::seed_from_u64(0);
        let font = FontMetrics::fallback();
        let image = TextImage::layout(
            "one two three four five",
            2,
            &font,
            10.0,
            &plain_style(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(image.lines.len(), 3);
        // widest line: "three four" = 27.5 + 2.5 + 22.0, plus padding on both sides
        assert_eq!(image.size().width, 92.0);
        // three lines of floor(10 * 1.2), plus padding on both sides
        assert_eq!(image.size().height, 76.0);
        assert_eq!(image.rendered_text(), "one two\nthree four\nfive");

        // lines are centered horizontally
        let last = &image.lines[2];
        assert_eq!(last.words[0].x, 20.0 + ((52.0f32 - 22.0) / 2.0).floor());
        assert!(image.lines.iter().all(|l| l.words.iter().all(|w| w.style == WordStyle::Normal)));
    }

    #[test]
    fn empty_text_is_only_padding() {
        let mut rng = SmallRng::seed_from_u64(0);
        let image =
            TextImage::layout("", 5, &FontMetrics::fallback(), 12.0, &plain_style(), &mut rng)
                .unwrap();
        assert!(image.lines.is_empty());
        assert_eq!(image.size().width, 40.0);
        assert_eq!(image.size().height, 40.0);
    }

    #[test]
    fn uppercase_changes_rendering_only() {
        let mut rng = SmallRng::seed_from_u64(0);
        let style = StyleConfig {
            uppercase_prob: 1.0,
            ..plain_style()
        };
        let image =
            TextImage::layout("quiet words", 5, &FontMetrics::fallback(), 12.0, &style, &mut rng)
                .unwrap();
        assert_eq!(image.rendered_text(), "QUIET WORDS");
        assert_eq!(image.source_text, "quiet words");
    }

    #[test]
    fn resize_and_rotation_change_size() {
        let mut rng = SmallRng::seed_from_u64(0);
        let base =
            TextImage::layout("abc def", 5, &FontMetrics::fallback(), 20.0, &plain_style(), &mut rng)
                .unwrap();
        let (w, h) = (base.size().width, base.size().height);

        let mut stretched = base.clone();
        stretched.apply(Augmentation::Resize { sx: 1.25, sy: 1.0 });
        assert_eq!(stretched.size().width, (w * 1.25).floor());
        assert_eq!(stretched.size().height, h);

        let mut compressed = base.clone();
        compressed.apply(Augmentation::Resize { sx: 1.0, sy: 0.75 });
        assert_eq!(compressed.size().height, (h * 0.75).floor());

        let mut degraded = base.clone();
        degraded.apply(Augmentation::ColorDegradation { saturation: 0.5 });
        assert_eq!(degraded.size(), base.size());
        assert_eq!(degraded.saturation(), 0.5);

        let mut rotated = base.clone();
        rotated.apply(Augmentation::Rotation { degrees: 0.0 });
        assert_eq!(rotated.size(), base.size());

        let mut left = base.clone();
        left.apply(Augmentation::Rotation { degrees: 20.0 });
        let mut right = base.clone();
        right.apply(Augmentation::Rotation { degrees: -20.0 });
        assert_eq!(left.size(), right.size());
        assert!(left.size().width > w && left.size().height > h);
    }

    #[test]
    fn rotated_square_expands_to_its_diagonal() {
        let mut rng = SmallRng::seed_from_u64(0);
        let style = StyleConfig {
            padding: 50.0,
            ..plain_style()
        };
        let mut square =
            TextImage::layout("", 1, &FontMetrics::fallback(), 10.0, &style, &mut rng).unwrap();
        assert_eq!(square.size().width, 100.0);
        assert_eq!(square.size().height, 100.0);
        square.apply(Augmentation::Rotation { degrees: 45.0 });
        assert_eq!(square.size().width, 142.0);
        assert_eq!(square.size().height, 142.0);
    }

    #[test]
    fn augmenter_respects_skip_probability() {
        let mut rng = SmallRng::seed_from_u64(0);
        let image = TextImage::layout(
            SAMPLE_TEXTS[1],
            4,
            &FontMetrics::fallback(),
            14.0,
            &plain_style(),
            &mut rng,
        )
        .unwrap();

        let never = RandomAugmenter::new(AugmentConfig {
            skip_prob: 1.0,
            ..AugmentConfig::default()
        });
        let always = RandomAugmenter::new(AugmentConfig {
            skip_prob: 0.0,
            ..AugmentConfig::default()
        });

        for _ in 0..100 {
            let untouched = never.augment(image.clone(), &mut rng);
            assert!(untouched.augmentations.is_empty());
            assert_eq!(untouched.size(), image.size());

            let augmented = always.augment(image.clone(), &mut rng);
            assert!((1..=3).contains(&augmented.augmentations.len()));
            let n_rotations = augmented
                .augmentations
                .iter()
                .filter(|a| matches!(a, Augmentation::Rotation { .. }))
                .count();
            assert!(n_rotations <= 1);
        }
    }

    #[test]
    fn generator_rerolls_presentation() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut generator = TextImageGenerator::new(load_fonts(&no_fonts()), StyleConfig::default()).unwrap();
        let text = SAMPLE_TEXTS[4];
        let n_words = text.split_whitespace().count();

        let mut sizes = HashSet::new();
        for _ in 0..50 {
            let image = generator.render(text, &mut rng).unwrap();
            assert!((4.0..=26.0).contains(&image.font_size));
            let n_lines = image.lines.len();
            assert!(n_lines >= n_words.div_ceil(13) && n_lines <= n_words.div_ceil(3));
            assert_eq!(image.lines.iter().map(|l| l.words.len()).sum::<usize>(), n_words);
            sizes.insert((image.size().width as u32, image.size().height as u32));
        }
        assert!(sizes.len() > 1);
    }

    #[test]
    fn svg_sink_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        let mut sink = SvgPageSink::new(
            dir.path(),
            SvgDrawOptions {
                draw_bboxes: true,
                ..SvgDrawOptions::default()
            },
        );
        let mut image = TextImage::layout(
            "How many bolts",
            3,
            &FontMetrics::fallback(),
            16.0,
            &plain_style(),
            &mut rng,
        )
        .unwrap();
        image.apply(Augmentation::ColorDegradation { saturation: 0.4 });
        image.apply(Augmentation::Rotation { degrees: 10.0 });

        let mut page = PageState::new(3, 612.0, 792.0);
        let mut canvas = sink.open_page(&page).unwrap();
        let bbox = sink.place(&mut canvas, &image, 300.0, 400.0).unwrap();
        assert_eq!(bbox.centroid(), (300.0, 400.0));
        assert_eq!(bbox.size(), image.size());
        page.register(bbox, &image.source_text);

        let path = sink.finalize(canvas, &page).unwrap();
        assert_eq!(path, dir.path().join("ocr_3.svg"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("bolts"));
        assert!(content.contains("saturate"));
        assert!(content.contains("rotate(-10)"));
    }

    #[test]
    fn generate_end_to_end() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let texts = SAMPLE_TEXTS
            .iter()
            .cycle()
            .take(40)
            .enumerate()
            .map(|(i, t)| format!("{i}: {t}"))
            .collect::<Vec<_>>();

        let pages = generate(texts.clone(), &test_config(), dir.path()).unwrap();
        assert!(!pages.is_empty());

        let mut placed = vec![];
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.page_number, i);
            assert!(fs::metadata(&page.page_path).is_ok());
            let boxes = page.text_elements.iter().map(|e| e.bbox).collect::<Vec<_>>();
            for (j, b) in boxes.iter().enumerate() {
                assert!(b.x0 >= 0.0 && b.y0 >= 0.0);
                assert!(b.x1 <= page.page_width && b.y1 <= page.page_height);
                for o in &boxes[j + 1..] {
                    let separated = b.x1 < o.x0 || o.x1 < b.x0 || b.y1 < o.y0 || o.y1 < b.y0;
                    assert!(separated, "overlapping boxes on page {i}");
                }
            }
            let expected_full_text = page
                .text_elements
                .iter()
                .map(|e| format!("{} ", e.text))
                .collect::<String>();
            assert_eq!(page.full_text, expected_full_text);
            placed.extend(page.text_elements.iter().map(|e| e.text.clone()));
        }
        assert_eq!(placed, texts);

        let written: Vec<ExtPage> = io::read_json(&dir.path().join(PAGES_FILE)).unwrap();
        assert_eq!(written, pages);
    }

    #[test]
    fn generate_respects_max_items() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenConfig {
            max_items: Some(3),
            ..test_config()
        };
        let texts = SAMPLE_TEXTS.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        let pages = generate(texts, &config, dir.path()).unwrap();
        let n_placed = pages.iter().map(|p| p.text_elements.len()).sum::<usize>();
        assert_eq!(n_placed, 3);
    }

    #[test]
    fn ground_truth_is_written_when_placement_is_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        let texts = vec!["a short question".to_string(), "x".repeat(3000)];
        assert!(generate(texts, &test_config(), dir.path()).is_err());

        let written: Vec<ExtPage> = io::read_json(&dir.path().join(PAGES_FILE)).unwrap();
        let n_svgs = fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
            .count();
        assert_eq!(written.len(), n_svgs);
        assert!(written.iter().all(|p| fs::metadata(&p.page_path).is_ok()));

        let placed = written
            .iter()
            .flat_map(|p| p.text_elements.iter().map(|e| e.text.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(placed, vec!["a short question"]);
        assert_eq!(written[0].full_text, "a short question ");
    }

    #[test_case(0, 612.0, 792.0; "no attempts")]
    #[test_case(15, 0.0, 792.0; "zero page width")]
    #[test_case(15, 612.0, -10.0; "negative page height")]
    fn invalid_config_is_an_error(n_attempts: usize, width: f32, height: f32) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.packer.n_attempts = n_attempts;
        config.page_size = PageSize { width, height };
        let texts = SAMPLE_TEXTS.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert!(generate(texts, &config, dir.path()).is_err());
        assert!(!dir.path().join(PAGES_FILE).exists());
    }

    #[test]
    fn benchmark_ranks_engines() {
        let dir = tempfile::tempdir().unwrap();
        let pages = generate(
            SAMPLE_TEXTS.iter().map(|t| t.to_string()).collect(),
            &test_config(),
            &dir.path().join("pages"),
        )
        .unwrap();

        let perfect = dir.path().join("perfect");
        let sloppy = dir.path().join("sloppy");
        fs::create_dir_all(&perfect).unwrap();
        fs::create_dir_all(&sloppy).unwrap();
        for page in &pages {
            let words = page.full_text.split_whitespace().collect::<Vec<_>>();
            let half = words[..words.len() / 2].join(" ");
            fs::write(perfect.join(format!("ocr_{}.txt", page.page_number)), &page.full_text).unwrap();
            fs::write(sloppy.join(format!("ocr_{}.txt", page.page_number)), half).unwrap();
        }

        let mut engines: Vec<Box<dyn OcrEngine>> = vec![
            Box::new(TranscriptEngine::new("sloppy", &sloppy)),
            Box::new(TranscriptEngine::new("perfect", &perfect)),
        ];
        let scores = run_benchmark(&pages, &mut engines, Duration::ZERO).unwrap();
        assert_eq!(scores[0].engine, "perfect");
        assert!(approx_eq!(f64, scores[0].mean_accuracy, 100.0, epsilon = 1e-6));
        assert!(scores[1].mean_accuracy < 100.0);
        assert_eq!(scores[1].page_accuracies.len(), pages.len());
    }

    #[test]
    fn missing_transcript_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let page = ExtPage {
            page_number: 0,
            page_path: "ocr_0.svg".to_string(),
            page_width: 612.0,
            page_height: 792.0,
            full_text: "nothing here ".to_string(),
            text_elements: vec![],
        };
        let mut engines: Vec<Box<dyn OcrEngine>> =
            vec![Box::new(TranscriptEngine::new("absent", dir.path()))];
        assert!(run_benchmark(&[page], &mut engines, Duration::ZERO).is_err());
    }

    #[test]
    fn text_items_from_lines_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("items.txt");
        fs::write(&txt, "first item\n\n  second item  \n").unwrap();
        assert_eq!(io::read_text_items(&txt).unwrap(), vec!["first item", "second item"]);

        let json = dir.path().join("items.json");
        fs::write(&json, r#"["a question?", "another one"]"#).unwrap();
        assert_eq!(io::read_text_items(&json).unwrap(), vec!["a question?", "another one"]);

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "\n\n").unwrap();
        assert!(io::read_text_items(&empty).is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.prng_seed, config.prng_seed);
        assert_eq!(parsed.packer, config.packer);
        assert_eq!(parsed.style, config.style);
        assert_eq!(parsed.fonts, config.fonts);
    }

    #[test]
    fn unreadable_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("broken.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();
        let fonts = load_fonts(&FontConfig {
            font_paths: vec![bogus],
            font_dirs: vec![],
        });
        assert_eq!(fonts.len(), 1);
        assert!(!fonts[0].is_loaded());
        assert_eq!(fonts[0].family, "sans-serif");
    }
}
