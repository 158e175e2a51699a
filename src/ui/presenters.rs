use crate::io::OutputWriter;
use crate::models::position::to_light_years;
use crate::models::star::Star;
use crate::models::world::World;
use crate::services::navigation::{Route, RouteError};
use crate::services::spatial::SectorSummary;

pub struct GenerationPresenter;

impl GenerationPresenter {
    pub fn show_report(world: &World, output: &mut dyn OutputWriter) {
        let stats = world.statistics();
        let config = world.config();

        for reason in stats.termination.reasons() {
            output.writeln(&format!("GENERATION STOPPED: HIT {}", reason.label().to_uppercase()));
        }
        output.writeln(&format!(
            "{} STARS GENERATED IN {}MS",
            world.star_count(),
            stats.elapsed.as_millis()
        ));
        output.writeln(&format!(
            "{} EXTRA GENERATION LOOPS TO MEET THE {} UNIT STAR DISTANCE",
            stats.rejected_attempts, config.minimum_star_distance
        ));
        if config.radial {
            output.writeln(&format!(
                "{} CANDIDATES DISCARDED OUTSIDE THE RADIAL LIMIT",
                stats.discarded_outside_disk
            ));
        }
        output.writeln(&format!(
            "MAX OF {} CHECKS PER CANDIDATE AT {} SECTOR DEPTH",
            stats.max_proximity_checks, stats.scan_depth
        ));
        output.writeln("");

        let grid = world.grid();
        output.writeln(&format!(
            "WORLD SIZE {}  SECTORS {}x{} OF {} UNITS",
            world.size(),
            grid.rows(),
            grid.columns(),
            grid.delimiter()
        ));
        output.writeln(&format!("{:<6}{:>8}{:>8}", "CLASS", "COUNT", "SHARE"));
        for (class, count) in world.spectral_counts() {
            let share = if world.star_count() == 0 {
                0.0
            } else {
                count as f64 * 100.0 / world.star_count() as f64
            };
            output.writeln(&format!("{:<6}{:>8}{:>7.1}%", class.letter(), count, share));
        }
        output.writeln(&format!("LARGEST STAR SIZE {}", world.largest_star_size()));
    }
}

pub struct SectorPresenter;

impl SectorPresenter {
    pub fn show_summary(summary: &SectorSummary, output: &mut dyn OutputWriter) {
        let adjacent: Vec<String> = summary.adjacent.iter().map(|l| l.to_string()).collect();
        output.writeln(&format!("ROW:              {}", summary.row()));
        output.writeln(&format!("COLUMN:           {}", summary.column()));
        output.writeln(&format!("SECTOR:           {}", summary.sector));
        output.writeln(&format!("STARS IN SECTOR:  {}", summary.stars_in_sector));
        output.writeln(&format!("ADJACENT SECTORS: {}", adjacent.join(",")));
        output.writeln(&format!("STARS ADJACENT:   {}", summary.stars_in_adjacent));
        output.writeln(&format!("TOTAL STARS:      {}", summary.total_stars()));
    }
}

pub struct StarPresenter;

impl StarPresenter {
    pub fn show_star(star: &Star, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} CLASS {} AT {} IN SECTOR {}",
            star.name(),
            star.spectral_type(),
            star.position(),
            star.sector()
        ));
    }

    pub fn show_none(output: &mut dyn OutputWriter) {
        output.writeln("NO STAR MATCHES");
    }
}

pub struct RoutePresenter;

impl RoutePresenter {
    pub fn show_route(route: &Route, world: &World, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "ROUTE OF {} HOP(S), {:.2} LIGHT YEARS",
            route.len(),
            route.total_light_years()
        ));
        let stars = route.stars(world);
        for (index, (hop, pair)) in route.hops().iter().zip(stars.windows(2)).enumerate() {
            output.write(&format!("{:>4}. {} -> {}", index + 1, pair[0].name(), pair[1].name()));
            output.writeln(&format!("  ({:.2} LY)", to_light_years(hop.distance)));
        }
    }

    pub fn show_failure(error: &RouteError, output: &mut dyn OutputWriter) {
        output.writeln(&format!("NO ROUTE: {}", error));
    }
}
