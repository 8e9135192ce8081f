use crate::chart::ChartView;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::ops::Range;

// On two-series charts the enabled variant is blue, disabled green.
const PALETTE: [RGBColor; 8] = [
    RGBColor(37, 99, 235),
    RGBColor(22, 163, 74),
    RGBColor(220, 38, 38),
    RGBColor(217, 119, 6),
    RGBColor(124, 58, 237),
    RGBColor(8, 145, 178),
    RGBColor(219, 39, 119),
    RGBColor(75, 85, 99),
];

const GRID: RGBColor = RGBColor(229, 231, 235);
#[cfg(not(feature = "ttf"))]
const GRID_DIVISIONS: u32 = 5;
const POINT_RADIUS: u32 = 4;

type PlotContext<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub(super) fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

impl ChartView {
    /// Draws the plot only: grid, axes, series and legend. The title and
    /// anything else around the chart are never drawn here.
    ///
    /// Absent cells are skipped and the line joins the neighbouring
    /// measurements.
    pub fn draw_plot<DB>(
        &self,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
    where
        DB: DrawingBackend,
    {
        let (x_range, y_range) = self.plot_ranges();

        let mut chart = ChartBuilder::on(area)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(x_range.clone(), y_range.clone())?;

        draw_mesh(&mut chart, &x_range, &y_range)?;

        for (index, label) in self.series.iter().enumerate() {
            let color = series_color(index);
            let points = self.series_points(index);

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(2),
                ))?
                .label(label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, POINT_RADIUS, color.filled())),
            )?;
        }

        draw_legend(&mut chart)?;

        Ok(())
    }

    fn plot_ranges(&self) -> (Range<f64>, Range<f64>) {
        let (lo, hi) = self.size_bounds().unwrap_or((0.0, 1.0));
        let x = if hi > lo {
            lo..hi
        } else {
            (lo - 0.5).max(0.0)..hi + 0.5
        };

        let top = self
            .max_duration()
            .filter(|m| *m > 0.0)
            .unwrap_or(1.0)
            * 1.1;

        (x, 0.0..top)
    }
}

#[cfg(feature = "ttf")]
fn draw_mesh<DB: DrawingBackend>(
    chart: &mut PlotContext<'_, DB>,
    _x: &Range<f64>,
    _y: &Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    chart
        .configure_mesh()
        .x_desc("Tamanho (MB)")
        .y_desc("Duração")
        .y_label_formatter(&|v: &f64| crate::chart::format_duration(*v))
        .light_line_style(GRID.stroke_width(1))
        .draw()
}

// Without a font backend plotters cannot draw text, so the mesh is drawn
// from plain paths.
#[cfg(not(feature = "ttf"))]
fn draw_mesh<DB: DrawingBackend>(
    chart: &mut PlotContext<'_, DB>,
    x: &Range<f64>,
    y: &Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let step = |r: &Range<f64>, i: u32| {
        r.start + (r.end - r.start) * f64::from(i) / f64::from(GRID_DIVISIONS)
    };

    chart.draw_series((0..=GRID_DIVISIONS).map(|i| {
        let at = step(x, i);
        PathElement::new(vec![(at, y.start), (at, y.end)], GRID.stroke_width(1))
    }))?;
    chart.draw_series((0..=GRID_DIVISIONS).map(|i| {
        let at = step(y, i);
        PathElement::new(vec![(x.start, at), (x.end, at)], GRID.stroke_width(1))
    }))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x.start, y.end), (x.start, y.start), (x.end, y.start)],
        BLACK.stroke_width(1),
    )))?;

    Ok(())
}

#[cfg(feature = "ttf")]
fn draw_legend<DB: DrawingBackend>(
    chart: &mut PlotContext<'_, DB>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()
}

#[cfg(not(feature = "ttf"))]
fn draw_legend<DB: DrawingBackend>(
    _chart: &mut PlotContext<'_, DB>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    Ok(())
}
