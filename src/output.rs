use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::model::{MatchOverview, OVERVIEW_HEADERS};

impl MatchOverview {
    /// File name used when saving this overview into a directory.
    pub fn csv_file_name(&self) -> String {
        format!("{}_overview.csv", self.match_id)
    }

    /// Write the header row followed by one record per player row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(OVERVIEW_HEADERS)?;
        for row in &self.rows {
            wtr.write_record(row.to_record())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Save the overview as `{match_id}_overview.csv` inside `dir`.
    ///
    /// Returns `Ok(None)` without writing anything when `dir` is not an
    /// existing directory.
    pub fn save_csv(&self, dir: &Path) -> Result<Option<PathBuf>> {
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "output directory does not exist, skipping csv");
            return Ok(None);
        }
        let path = dir.join(self.csv_file_name());
        info!(path = %path.display(), "writing overview csv");
        let file = std::fs::File::create(&path)?;
        self.write_csv(io::BufWriter::new(file))?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlayerStatRow, Side, StatLine};

    /// A directory under the system temp dir, removed before use and on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("vlr-overview-{}-{}", name, std::process::id()));
            let _ = std::fs::remove_dir_all(&dir);
            Self(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn overview() -> MatchOverview {
        let row = |side, name: &str| PlayerStatRow {
            stats: StatLine {
                rating: "1.10".to_string(),
                kd_diff: "+3".to_string(),
                fk_diff: "-1".to_string(),
                ..Default::default()
            },
            side,
            match_id: 378662,
            map_id: "172398".to_string(),
            agent: "omen".to_string(),
            player_name: name.to_string(),
            org: "SEN".to_string(),
        };
        MatchOverview {
            match_id: 378662,
            rows: vec![row(Side::Attack, "zekken"), row(Side::Combined, "Sacy")],
        }
    }

    #[test]
    fn test_csv_header() {
        let mut buf = Vec::new();
        overview().write_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Rating,Average Combat Score,Kills,Deaths,Assists,Kills - Deaths,KAST %,\
             Average Damage per Round,Headshot %,First Kills,First Deaths,Kills - Deaths,\
             Player Side,Match ID,Map ID,Agent,Player Name,Org"
        );
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        overview().write_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1.10,,,,,+3,,,,,,-1,mod-t,378662,172398,omen,zekken,SEN"
        );
        assert!(lines[2].contains(",mod-both,"));
    }

    #[test]
    fn test_save_csv_skips_missing_directory() {
        let scratch = ScratchDir::new("missing-dir");
        let written = overview().save_csv(&scratch.0).unwrap();
        assert!(written.is_none());
        assert!(!scratch.0.exists());
    }

    #[test]
    fn test_save_csv_writes_file() {
        let scratch = ScratchDir::new("save");
        std::fs::create_dir_all(&scratch.0).unwrap();
        let path = overview().save_csv(&scratch.0).unwrap().unwrap();
        assert_eq!(path, scratch.0.join("378662_overview.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}
