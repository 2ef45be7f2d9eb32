//! # Mix Design CLI
//!
//! Line-mode interface for the concrete mix proportioning engine.
//! Prompts for the main design inputs (defaults reproduce an M35 trial
//! mix), prints the proportioning sheet, and emits the full report as JSON.

use std::io::{self, BufRead, Write};

use mix_core::design::calculate;
use mix_core::input::MixDesignInput;
use mix_core::materials::{CementType, ExposureCondition, FineAggregateZone};
use mix_core::report::CheckStatus;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Mix Design CLI - Concrete Proportioning per IS 10262");
    println!("====================================================");
    println!();

    let grade = prompt_str("Grade designation [M35]: ", "M35");
    let zone_str = prompt_str("Fine aggregate zone (I-IV) [II]: ", "II");
    let size = prompt_f64("Max aggregate size (mm) [20]: ", 20.0) as u32;
    let slump = prompt_f64("Target slump (mm) [140]: ", 140.0);
    let wc_ratio = prompt_f64("Adopted water-cement ratio [0.4]: ", 0.4);
    let cement_sg = prompt_f64("Cement specific gravity [2.9]: ", 2.9);
    let fine_sg = prompt_f64("Fine aggregate specific gravity [2.65]: ", 2.65);
    let coarse_sg = prompt_f64("Coarse aggregate specific gravity [2.66]: ", 2.66);

    let zone = match FineAggregateZone::from_str_flexible(&zone_str) {
        Ok(zone) => zone,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("Calculating {} mix design...", grade);
    println!();

    let input = MixDesignInput::new(
        grade,
        ExposureCondition::Severe,
        CementType::Ppc,
        size,
        zone,
        cement_sg,
        fine_sg,
        coarse_sg,
        slump,
        wc_ratio,
    )
    .with_superplasticizer(0.5, 15.0)
    .with_absorption(0.5, 1.05);

    match calculate(&input) {
        Ok(report) => {
            println!("═══════════════════════════════════════");
            println!("  MIX DESIGN RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Target strength:  {:.2} N/mm2", report.target_strength);
            println!(
                "w/c ratio:        {:.2} (max {:.2}) {}",
                report.water_cement_ratio.adopted,
                report.water_cement_ratio.maximum_for_durability,
                status_icon(report.water_cement_ratio.check)
            );
            println!(
                "Cement content:   {} kg/m3 (min {}) {}",
                report.cement_content.calculated,
                report.cement_content.minimum_required,
                status_icon(report.cement_content.check)
            );
            println!(
                "Water content:    {:.0} kg/m3 (add {:.2} after corrections)",
                report.water_content.final_ceiling, report.water_content.to_be_added
            );
            println!();
            println!("Mix (SSD), kg/m3:");
            println!("  Cement:            {:.2}", report.mix_ssd.cement);
            println!("  Water:             {:.2}", report.mix_ssd.water);
            println!("  Fine aggregate:    {:.2}", report.mix_ssd.fine_aggregate);
            println!("  Coarse aggregate:  {:.2}", report.mix_ssd.coarse_aggregate);
            println!("  Admixture:         {:.2}", report.mix_ssd.admixture);
            println!();
            println!("Mix (Field), kg/m3:");
            println!("  Water:             {:.2}", report.mix_field.water);
            println!("  Fine aggregate:    {:.2}", report.mix_field.fine_aggregate);
            println!("  Coarse aggregate:  {:.2}", report.mix_field.coarse_aggregate);
            println!();
            let wb = &report.batching.weight_batching;
            println!(
                "Weight batching:  {:.2} : 1 : {:.2} : {:.2} : {:.2} (w:c:sand:CA20:CA10)",
                wb.water, wb.sand, wb.ca20, wb.ca10
            );
            let vb = &report.batching.volume_batching;
            println!(
                "Volume batching:  {:.2} : 1 : {:.2} : {:.2} : {:.2}",
                vb.water, vb.sand, vb.ca20, vb.ca10
            );
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Report:");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn status_icon(check: CheckStatus) -> &'static str {
    match check {
        CheckStatus::Ok => "[OK]",
        CheckStatus::NotOk => "[NOT OK]",
    }
}
