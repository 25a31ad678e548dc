use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use interest_predictor::{
    encode, InterestModel, InterestPredictor, ModelStore, TreeNode, MODEL_FILE,
};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Age in years (the input form offers 18-80)
    #[arg(short, long, default_value_t = 25)]
    age: u32,

    /// Gender label, "Female" or "Male"
    #[arg(short, long, default_value = "Female")]
    gender: String,

    /// Directory holding the model artifact (defaults to the platform cache dir)
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Write a small pre-fitted demo artifact into the store before predicting
    #[arg(long)]
    seed_demo_model: bool,
}

/// A hand-specified fitted tree for demos: splits on gender, then on age.
fn demo_model() -> InterestModel {
    let root = TreeNode::Split {
        feature: 1,
        threshold: 0.5,
        left: Box::new(TreeNode::Split {
            feature: 0,
            threshold: 40.0,
            left: Box::new(TreeNode::Leaf {
                distribution: vec![0.7, 0.2, 0.1],
            }),
            right: Box::new(TreeNode::Leaf {
                distribution: vec![0.15, 0.1, 0.75],
            }),
        }),
        right: Box::new(TreeNode::Split {
            feature: 0,
            threshold: 35.0,
            left: Box::new(TreeNode::Leaf {
                distribution: vec![0.25, 0.6, 0.15],
            }),
            right: Box::new(TreeNode::Leaf {
                distribution: vec![0.1, 0.85, 0.05],
            }),
        }),
    };
    InterestModel::new(
        vec!["Animation".into(), "Action".into(), "Drama".into()],
        root,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = match &args.model_dir {
        Some(dir) => ModelStore::new(dir),
        None => ModelStore::new_default(),
    };

    if args.seed_demo_model {
        info!("Seeding demo artifact into {:?}", store.model_path());
        store
            .save(&demo_model())
            .context("failed to seed demo artifact")?;
    }

    let model = match store.load()? {
        Some(model) => model,
        None => {
            eprintln!("\u{26a0} Model not found");
            eprintln!(
                "Please ensure '{}' is present at {} (or pass --seed-demo-model).",
                MODEL_FILE,
                store.model_path().display()
            );
            return Ok(());
        }
    };

    let predictor = InterestPredictor::new(model)?;
    info!(
        "Predicting for age={}, gender={}",
        args.age, args.gender
    );

    let features = encode(args.age, &args.gender)?;
    let prediction = predictor.predict(&features)?;

    println!(
        "{} Predicted interest: {}",
        prediction.interest.glyph(),
        prediction.interest
    );
    println!("  Confidence: {:.1}%", prediction.display_confidence());

    Ok(())
}
