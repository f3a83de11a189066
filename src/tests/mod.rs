#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::chart::{ChartRenderer, PieChart, PieSlice, generate_pie_chart};
    use crate::config::AnalyzerConfig;
    use crate::dataset::{DatasetIndex, ScannedClass};
    use crate::error::{DatasetError, Result};
    use crate::split::SplitGenerator;
    use crate::stats::{Bucket, DatasetStatistics, TargetCounts};

    // Renderer that keeps every chart it is asked to draw
    #[derive(Default)]
    struct RecordingRenderer {
        charts: RefCell<Vec<PieChart>>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render_pie(&self, chart: &PieChart) -> Result<()> {
            self.charts.borrow_mut().push(chart.clone());
            Ok(())
        }
    }

    fn images(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}{}.jpg", prefix, i)).collect()
    }

    // A: 5 images, B: 2 images, C: 1 image, in that order
    fn sample_index() -> DatasetIndex {
        DatasetIndex::build(
            "dataset",
            vec![
                ScannedClass::new("A", images("a", 5)),
                ScannedClass::new("B", images("b", 2)),
                ScannedClass::new("C", images("c", 1)),
            ],
        )
        .expect("sample index")
    }

    #[test]
    fn test_aggregate_counters() {
        let index = sample_index();
        assert_eq!(index.total_classes(), 3);
        assert_eq!(index.total_images(), 8);

        let sum: usize = index.classes().map(|(_, record)| record.image_count).sum();
        assert_eq!(index.total_images(), sum);
        for (_, record) in index.classes() {
            assert_eq!(record.image_count, record.images.len());
        }
    }

    #[test]
    fn test_index_keeps_insertion_order() {
        let index = DatasetIndex::build(
            "dataset",
            vec![
                ScannedClass::new("zebra", images("z", 1)),
                ScannedClass::new("apple", images("a", 1)),
                ScannedClass::new("mango", images("m", 1)),
            ],
        )
        .unwrap();
        let names: Vec<&str> = index.classes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_build_rejects_empty_dataset() {
        let err = DatasetIndex::build("dataset", Vec::new()).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyDataset(_)));
    }

    #[test]
    fn test_build_rejects_empty_class() {
        let err = DatasetIndex::build(
            "dataset",
            vec![ScannedClass::new("A", images("a", 2)), ScannedClass::new("B", Vec::new())],
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::EmptyClass(ref name) if name == "B"));
    }

    #[test]
    fn test_build_rejects_duplicate_class() {
        let err = DatasetIndex::build(
            "dataset",
            vec![ScannedClass::new("A", images("a", 2)), ScannedClass::new("A", images("b", 1))],
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidArgument(_)));
    }

    #[test]
    fn test_mean_min_max() -> Result<()> {
        let index = sample_index();
        let stats = DatasetStatistics::new(&index);

        assert_eq!(stats.mean_per_class()?, 8 / 3);
        assert_eq!(stats.min_per_class(), 1);
        assert_eq!(stats.max_per_class(), 5);

        for (_, record) in index.classes() {
            assert!(stats.min_per_class() <= record.image_count);
            assert!(stats.max_per_class() >= record.image_count);
        }
        assert!(index.classes().any(|(_, r)| r.image_count == stats.min_per_class()));
        assert!(index.classes().any(|(_, r)| r.image_count == stats.max_per_class()));
        Ok(())
    }

    #[test]
    fn test_min_with_single_class() {
        let index = DatasetIndex::build("dataset", vec![ScannedClass::new("only", images("o", 4))]).unwrap();
        let stats = DatasetStatistics::new(&index);
        assert_eq!(stats.min_per_class(), 4);
        assert_eq!(stats.max_per_class(), 4);
        assert_eq!(stats.mean_per_class().unwrap(), 4);
    }

    #[test_case(1, vec!["C"] ; "single image")]
    #[test_case(2, vec!["B"] ; "two images")]
    #[test_case(5, vec!["A"] ; "five images")]
    #[test_case(4, vec![] ; "no match")]
    fn test_classes_with_n_images(n: usize, expected: Vec<&str>) {
        let index = sample_index();
        let stats = DatasetStatistics::new(&index);
        assert_eq!(stats.classes_with_n_images(n).unwrap(), expected);
    }

    #[test]
    fn test_classes_with_n_images_keeps_index_order() {
        let index = DatasetIndex::build(
            "dataset",
            vec![
                ScannedClass::new("second", images("s", 2)),
                ScannedClass::new("first", images("f", 2)),
                ScannedClass::new("other", images("o", 3)),
            ],
        )
        .unwrap();
        let stats = DatasetStatistics::new(&index);
        assert_eq!(stats.classes_with_n_images(2).unwrap(), vec!["second", "first"]);
    }

    #[test]
    fn test_classes_with_zero_images_is_invalid() {
        let index = sample_index();
        let err = DatasetStatistics::new(&index).classes_with_n_images(0).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidArgument(_)));
    }

    #[test]
    fn test_proportion_buckets_sum_to_total() -> Result<()> {
        let index = sample_index();
        let report = DatasetStatistics::new(&index).proportion(vec![1usize, 2], None)?;

        assert_eq!(
            report.buckets,
            vec![Bucket { image_count: 1, classes: 1 }, Bucket { image_count: 2, classes: 1 }]
        );
        assert_eq!(report.remaining, 1);
        let matched: usize = report.buckets.iter().map(|b| b.classes).sum();
        assert_eq!(matched + report.remaining, index.total_classes());
        Ok(())
    }

    #[test]
    fn test_proportion_accepts_scalar() -> Result<()> {
        let index = sample_index();
        let report = DatasetStatistics::new(&index).proportion(5usize, None)?;
        assert_eq!(report.buckets, vec![Bucket { image_count: 5, classes: 1 }]);
        assert_eq!(report.remaining, 2);
        assert_eq!(
            report.lines(),
            vec![
                "Number of classes with only 5 images : 1".to_string(),
                "Remaining number of classes : 2".to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_proportion_duplicate_targets_count_once() -> Result<()> {
        let index = sample_index();
        let report = DatasetStatistics::new(&index).proportion(vec![1usize, 1], None)?;
        assert_eq!(
            report.buckets,
            vec![Bucket { image_count: 1, classes: 1 }, Bucket { image_count: 1, classes: 0 }]
        );
        assert_eq!(report.remaining, 2);
        Ok(())
    }

    #[test_case(vec![0] ; "zero")]
    #[test_case(vec![1, 0, 3] ; "zero among valid")]
    fn test_proportion_rejects_non_positive(targets: Vec<usize>) {
        let index = sample_index();
        let err = DatasetStatistics::new(&index).proportion(targets, None).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidArgument(_)));
    }

    #[test]
    fn test_proportion_renders_pie_chart() -> Result<()> {
        let index = sample_index();
        let renderer = RecordingRenderer::default();
        DatasetStatistics::new(&index).proportion(vec![1usize, 2, 3], Some(&renderer))?;

        let charts = renderer.charts.borrow();
        assert_eq!(charts.len(), 1);
        let labels: Vec<&str> = charts[0].slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["classes with 1 imgs", "classes with 2 imgs", "classes with 3 imgs", "Other classes"]
        );
        let values: Vec<usize> = charts[0].slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 1, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_proportion_percentages() -> Result<()> {
        let index = DatasetIndex::build(
            "dataset",
            vec![
                ScannedClass::new("A", images("a", 1)),
                ScannedClass::new("B", images("b", 1)),
                ScannedClass::new("C", images("c", 2)),
                ScannedClass::new("D", images("d", 7)),
            ],
        )?;
        let report = DatasetStatistics::new(&index).proportion(1usize, None)?;
        assert_eq!(report.percentages(), vec![50.0, 50.0]);
        Ok(())
    }

    #[test]
    fn test_class_info() -> Result<()> {
        let index = sample_index();
        let stats = DatasetStatistics::new(&index);

        let record = stats.class_info("A")?;
        assert_eq!(record.image_count, 5);
        assert_eq!(record.images[0], "a0.jpg");

        let err = stats.class_info("Z").unwrap_err();
        assert!(matches!(err, DatasetError::UnknownClass(ref name) if name == "Z"));
        Ok(())
    }

    #[test]
    fn test_analyze_forces_chart() -> Result<()> {
        let index = sample_index();
        let renderer = RecordingRenderer::default();
        let report = DatasetStatistics::new(&index).analyze(TargetCounts::default(), &renderer)?;

        assert_eq!(report.total_images, 8);
        assert_eq!(report.total_classes, 3);
        assert_eq!(report.mean_per_class, 2);
        assert_eq!(report.min_per_class, 1);
        assert_eq!(report.max_per_class, 5);
        assert_eq!(report.proportion.remaining, 1);
        assert_eq!(renderer.charts.borrow().len(), 1);
        assert_eq!(report.lines()[0], "Number of images in image dataset: 8");
        Ok(())
    }

    #[test]
    fn test_split_example_dataset() -> Result<()> {
        let index = sample_index();
        let split = SplitGenerator::new(&index).create_train_test_split(3)?;

        // B (2 images) and C (1 image) hold fewer than 3 images and are skipped
        assert_eq!(split.test, vec!["A/a0.jpg 0".to_string()]);
        assert_eq!(
            split.train,
            vec![
                "A/a1.jpg 0".to_string(),
                "A/a2.jpg 0".to_string(),
                "A/a3.jpg 0".to_string(),
                "A/a4.jpg 0".to_string(),
            ]
        );
        assert_eq!(split.full.len(), 5);
        assert_eq!(split.full.len(), split.train.len() + split.test.len());
        assert_eq!(split.class_count, 1);
        assert!(split.full.iter().all(|item| item.starts_with("A/")));
        Ok(())
    }

    #[test]
    fn test_split_every_second_image_labels_two_classes() -> Result<()> {
        let index = sample_index();
        let split = SplitGenerator::new(&index).create_train_test_split(2)?;

        // A: 5 / 2 = 2 test images, B: 2 / 2 = 1 test image, C skipped
        assert_eq!(split.test, vec!["A/a0.jpg 0", "A/a1.jpg 0", "B/b0.jpg 1"]);
        assert_eq!(split.train, vec!["A/a2.jpg 0", "A/a3.jpg 0", "A/a4.jpg 0", "B/b1.jpg 1"]);
        assert_eq!(split.full.len(), 7);
        assert_eq!(split.class_count, 2);
        Ok(())
    }

    #[test]
    fn test_split_full_list_keeps_class_image_order() -> Result<()> {
        let index = sample_index();
        let split = SplitGenerator::new(&index).create_train_test_split(2)?;
        assert_eq!(split.full[0], "A/a0.jpg 0");
        assert_eq!(split.full[4], "A/a4.jpg 0");
        assert_eq!(split.full[5], "B/b0.jpg 1");
        assert_eq!(split.full[6], "B/b1.jpg 1");
        Ok(())
    }

    #[test]
    fn test_split_labels_skip_small_classes() -> Result<()> {
        let index = DatasetIndex::build(
            "dataset",
            vec![
                ScannedClass::new("small", images("s", 1)),
                ScannedClass::new("big", images("b", 4)),
                ScannedClass::new("tiny", images("t", 2)),
                ScannedClass::new("large", images("l", 6)),
            ],
        )?;
        let split = SplitGenerator::new(&index).create_train_test_split(3)?;

        assert_eq!(split.class_count, 2);
        assert!(split.full.iter().filter(|i| i.starts_with("big/")).all(|i| i.ends_with(" 0")));
        assert!(split.full.iter().filter(|i| i.starts_with("large/")).all(|i| i.ends_with(" 1")));
        // big: 4 / 3 = 1 test image, large: 6 / 3 = 2 test images
        assert_eq!(split.test, vec!["big/b0.jpg 0", "large/l0.jpg 1", "large/l1.jpg 1"]);
        assert_eq!(split.full.len(), 10);
        Ok(())
    }

    #[test]
    fn test_split_with_n_one_puts_everything_in_test() -> Result<()> {
        let index = sample_index();
        let split = SplitGenerator::new(&index).create_train_test_split(1)?;
        assert!(split.train.is_empty());
        assert_eq!(split.test.len(), 8);
        assert_eq!(split.class_count, 3);
        assert_eq!(split.test.last().map(String::as_str), Some("C/c0.jpg 2"));
        Ok(())
    }

    #[test]
    fn test_split_is_idempotent() -> Result<()> {
        let index = sample_index();
        let generator = SplitGenerator::new(&index);
        let first = generator.create_train_test_split(2)?;
        let second = generator.create_train_test_split(2)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_split_rejects_zero() {
        let index = sample_index();
        let err = SplitGenerator::new(&index).create_train_test_split(0).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidArgument(_)));
    }

    #[test]
    fn test_split_report_renders_train_test_chart() -> Result<()> {
        let index = sample_index();
        let renderer = RecordingRenderer::default();
        let options = crate::split::SplitOptions {
            report: true,
            ..Default::default()
        };
        SplitGenerator::new(&index).create_train_test_split_with(3, &options, Some(&renderer))?;

        let charts = renderer.charts.borrow();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].slices[0].label, "Train");
        assert_eq!(charts[0].slices[0].value, 4);
        assert_eq!(charts[0].slices[1].label, "Test");
        assert_eq!(charts[0].slices[1].value, 1);
        Ok(())
    }

    #[test]
    fn test_split_without_report_draws_nothing() -> Result<()> {
        let index = sample_index();
        let renderer = RecordingRenderer::default();
        SplitGenerator::new(&index).create_train_test_split_with(3, &Default::default(), Some(&renderer))?;
        assert!(renderer.charts.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn test_svg_pie_chart() -> Result<()> {
        let index = sample_index();
        let report = DatasetStatistics::new(&index).proportion(vec![1usize, 2], None)?;
        let svg = generate_pie_chart(&report.pie_chart())?;

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("classes with 1 imgs: 1 (33.3%)"));
        assert!(svg.contains("Other classes: 1 (33.3%)"));
        assert_eq!(svg.matches("<path").count(), 3);
        Ok(())
    }

    #[test]
    fn test_svg_single_slice_is_full_circle() -> Result<()> {
        let chart = PieChart::new("one", "One", vec![PieSlice::new("All", 4)]);
        let svg = generate_pie_chart(&chart)?;
        assert!(svg.contains("<circle"));
        assert!(svg.contains("All: 4 (100.0%)"));
        Ok(())
    }

    #[test]
    fn test_svg_empty_chart_fails() {
        let chart = PieChart::new("empty", "Empty", vec![PieSlice::new("Nothing", 0)]);
        assert!(matches!(generate_pie_chart(&chart), Err(DatasetError::Chart(_))));
    }

    #[test]
    fn test_config_from_toml() -> anyhow::Result<()> {
        let config = AnalyzerConfig::from_toml(
            r#"
            [scan]
            extensions = ["jpg", "png"]
            show_progress = false

            [analysis]
            target_counts = 2

            [split]
            every_n = 4
            train_list = "lists/train.txt"
            report = true

            [charts]
            output_dir = "charts"
            "#,
        )?;

        assert_eq!(config.scan.extensions, Some(vec!["jpg".to_string(), "png".to_string()]));
        assert!(!config.scan.show_progress);
        assert!(config.scan.follow_links);
        assert_eq!(config.analysis.target_counts.as_slice(), &[2]);
        assert_eq!(config.split.every_n, 4);
        assert_eq!(config.split.output.train_list, Some(PathBuf::from("lists/train.txt")));
        assert_eq!(config.split.output.test_list, None);
        assert!(config.split.output.report);
        assert_eq!(config.charts.output_dir, Some(PathBuf::from("charts")));
        Ok(())
    }

    #[test]
    fn test_config_defaults() -> anyhow::Result<()> {
        let config = AnalyzerConfig::from_toml("")?;
        assert_eq!(config.analysis.target_counts.as_slice(), &[1, 2, 3]);
        assert_eq!(config.split.every_n, 3);
        assert!(config.scan.extensions.is_none());
        assert!(config.charts.output_dir.is_none());
        Ok(())
    }

    #[test]
    fn test_config_target_counts_list() -> anyhow::Result<()> {
        let config = AnalyzerConfig::from_toml("[analysis]\ntarget_counts = [1, 5]\n")?;
        assert_eq!(config.analysis.target_counts.as_slice(), &[1, 5]);
        Ok(())
    }
}
