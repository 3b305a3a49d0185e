use crate::common::*;
use crate::dto::trend::{category_mean::*, rendered_chart::*};
use crate::enums::{chart_sink::*, score_scale::*};
use crate::model::chart::trend_chart::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::io_utils::*;
use plotters::coord::Shift;
use plotters::prelude::*;

type ChartArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LINE_BLUE: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);

#[derive(Debug, Clone, Copy, Default, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = r#"
        Draws `chart` on a surface owned by this call and returns the encoded PNG.

        The RGB buffer and the drawing area live only inside this function, so no
        drawing state leaks into the next render, whichever way this one exits.
    "#]
    fn draw_png(chart: &TrendChart) -> anyhow::Result<Vec<u8>> {
        let (width, height) = chart.dimensions();
        let mut buffer: Vec<u8> = vec![0u8; (width * height * 3) as usize];

        {
            let root: ChartArea = BitMapBackend::with_buffer(&mut buffer, (width, height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            match chart {
                TrendChart::MultiCategoryLines {
                    title,
                    years,
                    series,
                    scale,
                } => Self::draw_multi_category_lines(&root, title, years, series, *scale)?,
                TrendChart::TopNBar { title, ranking } => {
                    Self::draw_top_n_bar(&root, title, ranking, chart.value_range())?
                }
                TrendChart::SingleCategoryLine {
                    title,
                    years,
                    scores,
                    scale,
                    ..
                } => Self::draw_single_category_line(&root, title, years, scores, *scale)?,
            }

            root.present()?;
        }

        encode_png(buffer, width, height)
    }

    fn draw_multi_category_lines(
        root: &ChartArea,
        title: &str,
        years: &[i32],
        series: &[CategorySeries],
        scale: ScoreScale,
    ) -> anyhow::Result<()> {
        let (first_year, last_year) = padded_year_bounds(years)?;

        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 32).into_font())
            .margin(25)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                (first_year..last_year).with_key_points(years.to_vec()),
                0f64..scale.upper_bound(),
            )?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Popularity Score")
            .x_labels(years.len())
            .x_label_formatter(&|year| year.to_string())
            .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
            .label_style(("sans-serif", 16).into_font())
            .draw()?;

        for (idx, category_series) in series.iter().enumerate() {
            let color: RGBAColor = Palette99::pick(idx).to_rgba();

            chart
                .draw_series(LineSeries::new(
                    category_series.points.iter().copied(),
                    ShapeStyle::from(&color).stroke_width(2),
                ))?
                .label(category_series.category.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&color).stroke_width(2))
                });

            chart.draw_series(
                category_series
                    .points
                    .iter()
                    .map(|&(year, score)| Circle::new((year, score), 4, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .label_font(("sans-serif", 15).into_font())
            .draw()?;

        Ok(())
    }

    fn draw_top_n_bar(
        root: &ChartArea,
        title: &str,
        ranking: &[CategoryMean],
        value_range: (f64, f64),
    ) -> anyhow::Result<()> {
        let bar_count: f64 = ranking.len() as f64;

        /* rank 0 sits on the highest slot so the best category is drawn on top */
        let slot_of = |rank: usize| -> f64 { bar_count - 1.0 - rank as f64 };

        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 28).into_font())
            .margin(25)
            .x_label_area_size(50)
            .y_label_area_size(20)
            .build_cartesian_2d(value_range.0..value_range.1, -0.5f64..(bar_count - 0.5))?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Popularity Score")
            .y_label_formatter(&|_| String::new())
            .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
            .label_style(("sans-serif", 16).into_font())
            .draw()?;

        chart.draw_series(ranking.iter().enumerate().map(|(rank, entry)| {
            let slot: f64 = slot_of(rank);
            Rectangle::new(
                [(0.0, slot - 0.35), (entry.mean_score, slot + 0.35)],
                SKY_BLUE.filled(),
            )
        }))?;

        chart.draw_series(ranking.iter().enumerate().map(|(rank, entry)| {
            EmptyElement::at((0.0, slot_of(rank)))
                + Text::new(
                    format!("{}  ({:.3})", entry.category.label(), entry.mean_score),
                    (8, -9),
                    ("sans-serif", 18).into_font(),
                )
        }))?;

        Ok(())
    }

    fn draw_single_category_line(
        root: &ChartArea,
        title: &str,
        years: &[i32],
        scores: &[f64],
        scale: ScoreScale,
    ) -> anyhow::Result<()> {
        let (first_year, last_year) = padded_year_bounds(years)?;

        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 28).into_font())
            .margin(25)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                (first_year..last_year).with_key_points(years.to_vec()),
                0f64..scale.upper_bound(),
            )?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Popularity Score")
            .x_labels(years.len())
            .x_label_formatter(&|year| year.to_string())
            .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
            .label_style(("sans-serif", 16).into_font())
            .draw()?;

        let points: Vec<(i32, f64)> = years.iter().copied().zip(scores.iter().copied()).collect();

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            ShapeStyle::from(&LINE_BLUE).stroke_width(2),
        ))?;

        chart.draw_series(
            points
                .iter()
                .map(|&(year, score)| Circle::new((year, score), 6, LINE_BLUE.filled())),
        )?;

        Ok(())
    }
}

#[doc = "First and last year; a single year is widened by one on each side so the axis keeps a width"]
fn padded_year_bounds(years: &[i32]) -> anyhow::Result<(i32, i32)> {
    let (first_year, last_year) = year_bounds(years)
        .ok_or_else(|| anyhow!("[ChartServiceImpl->padded_year_bounds] Cannot draw a chart without years"))?;

    if first_year == last_year {
        Ok((first_year - 1, last_year + 1))
    } else {
        Ok((first_year, last_year))
    }
}

#[doc = "Encodes a packed RGB buffer as PNG"]
pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let image: RgbImage = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        anyhow!(
            "[ChartServiceImpl->encode_png] Buffer does not hold a {}x{} RGB image",
            width,
            height
        )
    })?;

    let mut png_bytes: Vec<u8> = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .context("[ChartServiceImpl->encode_png] PNG encoding failed")?;

    Ok(png_bytes)
}

#[doc = "Hands a complete PNG to its sink. Nothing is delivered for a chart that failed to draw"]
pub async fn deliver_png(png_bytes: Vec<u8>, sink: ChartSink) -> anyhow::Result<RenderedChart> {
    match sink {
        ChartSink::File(path) => {
            write_file_atomically(&path, &png_bytes).await?;
            info!("Chart image written: {:?}", path);
            Ok(RenderedChart::File(path))
        }
        ChartSink::Inline => Ok(RenderedChart::Inline(BASE64_STANDARD.encode(png_bytes))),
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_chart(
        &self,
        chart: TrendChart,
        sink: ChartSink,
    ) -> anyhow::Result<RenderedChart> {
        let title: String = chart.title().to_string();

        let handle: tokio::task::JoinHandle<anyhow::Result<Vec<u8>>> =
            tokio::task::spawn_blocking(move || Self::draw_png(&chart));

        let png_bytes: Vec<u8> = handle
            .await
            .context("[ChartServiceImpl->render_chart] blocking task join failed (panic/cancelled)")?
            .with_context(|| format!("[ChartServiceImpl->render_chart] drawing failed: '{}'", title))?;

        deliver_png(png_bytes, sink).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::category::*;
    use crate::model::trend::trend_table::*;
    use crate::service::synthesizer_service_impl::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf =
            env::temp_dir().join(format!("fashion_trend_chart_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn encodes_rgb_buffer_as_png() {
        let png: Vec<u8> = encode_png(vec![255u8; 4 * 3 * 3], 4, 3).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn rejects_buffer_of_wrong_size() {
        assert!(encode_png(vec![0u8; 10], 4, 3).is_err());
    }

    #[test]
    fn single_year_axis_is_widened() {
        assert_eq!(padded_year_bounds(&[2024]).unwrap(), (2023, 2025));
        assert_eq!(padded_year_bounds(&[2015, 2024]).unwrap(), (2015, 2024));
        assert!(padded_year_bounds(&[]).is_err());
    }

    fn sample_charts() -> Vec<TrendChart> {
        let table: TrendTable = exhaustive_observations(
            &mut StdRng::seed_from_u64(17),
            &Category::ALL,
            &[2022, 2023, 2024, 2025, 2026, 2027],
            ScoreScale::Unit,
        );
        let ranking: Vec<CategoryMean> = vec![
            CategoryMean::new(Category::Sneaker, 0.81),
            CategoryMean::new(Category::Bag, 0.64),
            CategoryMean::new(Category::Coat, 0.52),
            CategoryMean::new(Category::Dress, 0.47),
            CategoryMean::new(Category::TShirtTop, 0.33),
        ];

        vec![
            TrendChart::multi_category_lines(
                &table,
                &Category::ALL,
                &[2022, 2023, 2024, 2025, 2026, 2027],
                ScoreScale::Unit,
            )
            .unwrap(),
            TrendChart::top_n_bar(&ranking).unwrap(),
            TrendChart::single_category_line(
                "Yearly Trend for Bag",
                Category::Bag,
                &(2018..=2027).collect::<Vec<i32>>(),
                &[12.0, 40.5, 33.3, 98.0, 0.0, 55.5, 61.2, 70.0, 7.7, 100.0],
                ScoreScale::Percent,
            )
            .unwrap(),
            TrendChart::single_category_line(
                "Trends for Bag (2024-2024)",
                Category::Bag,
                &[2024],
                &[0.5],
                ScoreScale::Unit,
            )
            .unwrap(),
        ]
    }

    #[tokio::test]
    async fn every_chart_kind_renders_a_png_of_its_canvas_size() {
        let chart_service: ChartServiceImpl = ChartServiceImpl::new();

        for chart in sample_charts() {
            let (width, height) = chart.dimensions();
            let title: String = chart.title().to_string();

            let payload: String = match chart_service
                .render_chart(chart, ChartSink::Inline)
                .await
                .unwrap()
            {
                RenderedChart::Inline(payload) => payload,
                other => panic!("unexpected delivery {:?} for '{}'", other, title),
            };

            let png: Vec<u8> = BASE64_STANDARD.decode(payload).unwrap();
            assert_eq!(&png[..8], &PNG_SIGNATURE, "'{}'", title);

            let decoded = image::load_from_memory(&png).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (width, height), "'{}'", title);
        }
    }

    #[tokio::test]
    async fn file_render_writes_a_decodable_image() {
        let dir: PathBuf = scratch_dir("render_file");
        let target: PathBuf = dir.join("yearly_trend_T-shirt_top.png");
        let years: Vec<i32> = (2018..=2027).collect();
        let scores: Vec<f64> = years.iter().map(|year| (year - 2017) as f64 * 9.5).collect();

        let rendered: RenderedChart = ChartServiceImpl::new()
            .render_single_category_line(
                "Yearly Trend for T-shirt/top",
                Category::TShirtTop,
                &years,
                &scores,
                ScoreScale::Percent,
                ChartSink::File(target.clone()),
            )
            .await
            .unwrap();

        assert_eq!(rendered, RenderedChart::File(target.clone()));

        let decoded = image::open(&target).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 500));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn inline_sink_returns_base64_of_the_png() {
        let png: Vec<u8> = encode_png(vec![0u8; 2 * 2 * 3], 2, 2).unwrap();

        match deliver_png(png.clone(), ChartSink::Inline).await.unwrap() {
            RenderedChart::Inline(payload) => {
                assert_eq!(BASE64_STANDARD.decode(payload).unwrap(), png);
            }
            other => panic!("unexpected delivery {:?}", other),
        }
    }

    #[tokio::test]
    async fn file_sink_overwrites_same_named_image() {
        let dir: PathBuf = scratch_dir("file_sink");
        let target: PathBuf = dir.join("yearly_trend_Bag.png");

        deliver_png(vec![1, 2, 3], ChartSink::File(target.clone()))
            .await
            .unwrap();
        let rendered: RenderedChart = deliver_png(vec![4, 5], ChartSink::File(target.clone()))
            .await
            .unwrap();

        assert_eq!(rendered, RenderedChart::File(target.clone()));
        assert_eq!(fs::read(&target).unwrap(), vec![4, 5]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn file_sink_surfaces_missing_directory() {
        let target: PathBuf = env::temp_dir()
            .join(format!("fashion_trend_no_such_dir_{}", std::process::id()))
            .join("top_5_trends.png");

        assert!(deliver_png(vec![1], ChartSink::File(target.clone()))
            .await
            .is_err());
        assert!(!target.exists());
    }
}
