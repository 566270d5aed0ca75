use console::Style;
use stackprep_core::pipeline::config::PreprocessConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_preprocess_summary(config: &PreprocessConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Stackprep Pipeline"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Selection"),
        s.value.apply_to(format!(
            "offset {}, stride {}",
            config.selection.offset, config.selection.stride
        ))
    );

    let block = config.downsample.block;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Block"),
        s.value.apply_to(format!("{}x{}", block.rows, block.cols))
    );
    match config.downsample.grid {
        Some((rows, cols)) => println!(
            "  {:<14}{}",
            s.label.apply_to("Grid"),
            s.value.apply_to(format!("{}x{}", rows, cols))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Grid"),
            s.value.apply_to("auto")
        ),
    }

    if config.normalize.enabled {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Normalize"),
            s.value.apply_to("0..1")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Normalize"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}
