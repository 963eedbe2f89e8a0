//! Six-month projection chart, drawn into the `#projectionChart` canvas.

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 400;

pub const MONTH_LABELS: [&str; 6] = ["Mês 1", "Mês 2", "Mês 3", "Mês 4", "Mês 5", "Mês 6"];

struct Series {
    label: &'static str,
    color: RGBColor,
    points: [i32; 6],
}

/// Estimated reach (thousands) and qualified leads per month.
const SERIES: [Series; 2] = [
    Series {
        label: "Alcance Estimado (milhares)",
        color: RGBColor(0x25, 0x63, 0xeb),
        points: [40, 50, 65, 80, 95, 110],
    },
    Series {
        label: "Leads Qualificados",
        color: RGBColor(0x10, 0xb9, 0x81),
        points: [9, 15, 22, 30, 38, 45],
    },
];

/// Why the chart could not be drawn.
#[derive(Debug)]
pub enum ChartError {
    /// No 2d backend could be built on the canvas element.
    Backend,
    Draw(String),
}

fn draw_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// Top of the y axis: the largest plotted value plus 10% headroom.
fn y_axis_max(series: &[Series]) -> i32 {
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().copied())
        .max()
        .unwrap_or(0);
    max + max / 10
}

fn draw(canvas: HtmlCanvasElement) -> Result<(), ChartError> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::Backend)?;
    let root = backend.into_drawing_area();

    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Projeção de Alcance e Leads (6 Meses)", ("sans-serif", 18))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..(MONTH_LABELS.len() as i32 - 1), 0..y_axis_max(&SERIES))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(MONTH_LABELS.len())
        .x_label_formatter(&|x| {
            MONTH_LABELS
                .get(*x as usize)
                .map(|label| label.to_string())
                .unwrap_or_default()
        })
        .x_desc("Período")
        .y_desc("Quantidade")
        .draw()
        .map_err(draw_err)?;

    for series in &SERIES {
        let color = series.color;
        let points: Vec<(i32, i32)> = series
            .points
            .iter()
            .enumerate()
            .map(|(month, value)| (month as i32, *value))
            .collect();

        chart
            .draw_series(AreaSeries::new(points.clone(), 0, color.mix(0.2)))
            .map_err(draw_err)?;
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(draw_err)?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.2))
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// The projection line chart. Drawn once on mount; if the canvas is not
/// there, nothing is drawn and the rest of the section renders as usual.
#[function_component(ProjectionChart)]
pub fn projection_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(err) = draw(canvas) {
                            gloo_console::error!(format!("projection chart not drawn: {:?}", err));
                        }
                    }
                    None => log::warn!("projection chart canvas missing, skipping render"),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="chart-container">
            <canvas
                id="projectionChart"
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="max-width: 100%;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_series_cover_every_month() {
        for series in &SERIES {
            assert_eq!(series.points.len(), MONTH_LABELS.len());
        }
    }

    #[test]
    fn axis_leaves_headroom_above_the_data() {
        let top = y_axis_max(&SERIES);
        for series in &SERIES {
            assert!(series.points.iter().all(|v| *v < top));
        }
        assert_eq!(top, 121);
    }

    #[test]
    fn projections_grow_month_over_month() {
        for series in &SERIES {
            assert!(series.points.windows(2).all(|w| w[0] < w[1]), "{} not increasing", series.label);
        }
    }
}
