use crate::common::*;

#[doc = r#"
    Generic function that reads a TOML file and deserializes it into the requested type.

    # Type Parameters
    * `T` - Struct type implementing `DeserializeOwned`

    # Arguments
    * `file_path` - Absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - Parsed struct on success

    # Errors
    - The file does not exist or cannot be read
    - The TOML is malformed or does not match the struct fields
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = r#"
    Writes `bytes` to `target` through a uniquely named temporary sibling and a rename.

    Readers of `target` see either the previous file or one complete new one,
    never a partially written image, even when several calls write the same
    target at once. The temporary file is removed on every failure path.
    The parent directory must already exist.
"#]
pub async fn write_file_atomically(target: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let target: PathBuf = target.to_path_buf();
    let bytes: Vec<u8> = bytes.to_vec();

    tokio::task::spawn_blocking(move || persist_through_temp_file(&target, &bytes))
        .await
        .context("[write_file_atomically] blocking task join failed (panic/cancelled)")?
}

fn persist_through_temp_file(target: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let file_name: String = target
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            anyhow!(
                "[write_file_atomically] Target path has no file name: {:?}",
                target
            )
        })?;

    let parent: &Path = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    /* dropping the handle deletes the temp file, so every early return cleans up */
    let mut tmp_file: NamedTempFile = TempFileBuilder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(parent)
        .with_context(|| {
            format!(
                "[write_file_atomically] Failed to create a temp file in {:?}",
                parent
            )
        })?;

    let tmp_path: PathBuf = tmp_file.path().to_path_buf();

    tmp_file
        .write_all(bytes)
        .with_context(|| format!("[write_file_atomically] Failed to write {:?}", tmp_path))?;
    tmp_file
        .flush()
        .with_context(|| format!("[write_file_atomically] Failed to flush {:?}", tmp_path))?;

    tmp_file
        .persist(target)
        .map_err(|e| {
            anyhow!(
                "[write_file_atomically] Failed to move image to {:?}: {:?}",
                target,
                e.error
            )
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf =
            env::temp_dir().join(format!("fashion_trend_io_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn atomic_write_overwrites_previous_file() {
        let dir: PathBuf = scratch_dir("overwrite");
        let target: PathBuf = dir.join("chart.png");

        write_file_atomically(&target, b"first").await.unwrap();
        write_file_atomically(&target, b"second").await.unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"second");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn atomic_write_fails_when_directory_is_missing() {
        let target: PathBuf = env::temp_dir()
            .join(format!("fashion_trend_missing_{}", std::process::id()))
            .join("chart.png");

        assert!(write_file_atomically(&target, b"png").await.is_err());
        assert!(!target.exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_to_one_target_leave_a_whole_file() {
        let dir: PathBuf = scratch_dir("concurrent");
        let target: PathBuf = dir.join("yearly_trend_Bag.png");
        let payloads: Vec<Vec<u8>> = (1u8..=8)
            .map(|marker| vec![marker; 1024 * marker as usize])
            .collect();

        for _ in 0..20 {
            let writers: Vec<tokio::task::JoinHandle<anyhow::Result<()>>> = payloads
                .iter()
                .cloned()
                .map(|payload| {
                    let target: PathBuf = target.clone();
                    tokio::spawn(async move { write_file_atomically(&target, &payload).await })
                })
                .collect();

            for writer in writers {
                writer.await.unwrap().unwrap();
            }

            let written: Vec<u8> = fs::read(&target).unwrap();
            assert!(payloads.contains(&written));
        }

        /* no temp file survives */
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn read_toml_reports_missing_file() {
        let result: anyhow::Result<toml::Value> =
            read_toml_from_file("./definitely/not/here.toml");
        assert!(result.is_err());
    }
}
