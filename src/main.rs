use std::path::PathBuf;

use structopt::StructOpt;

use simple_engine::{
    init_logging, run, Application, EngineOptions, FrameContext, LoggingConfig, Scene,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "simple-engine", about = "OpenGL playground for shapes and models")]
struct Opt {
    /// Scene and window configuration; written with defaults when missing
    #[structopt(long, parse(from_os_str), default_value = "resources/config.ron")]
    config: PathBuf,

    #[structopt(long)]
    width: Option<u32>,

    #[structopt(long)]
    height: Option<u32>,

    #[structopt(long)]
    title: Option<String>,

    /// Log filter in env_logger syntax, e.g. "debug" or "simple_engine=trace"
    #[structopt(long)]
    log: Option<String>,
}

impl Opt {
    /// Logger settings known before the config file is read.
    fn logging(&self) -> LoggingConfig {
        LoggingConfig::with_filter(self.log.clone())
    }

    fn apply(self, options: &mut EngineOptions) {
        if let Some(width) = self.width {
            options.window_size.0 = width;
        }
        if let Some(height) = self.height {
            options.window_size.1 = height;
        }
        if let Some(title) = self.title {
            options.title = title;
        }
        if self.log.is_some() {
            options.log_filter = self.log;
        }
    }
}

struct Editor {
    options: EngineOptions,
    scene: Option<Scene>,
    failed: bool,
}

impl Application for Editor {
    fn on_update(&mut self, ctx: &mut FrameContext) {
        if self.scene.is_none() && !self.failed {
            match Scene::from_options(&self.options) {
                Ok(scene) => self.scene = Some(scene),
                Err(e) => {
                    log::error!("can't build scene: {}", e);
                    self.failed = true;
                }
            }
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.update(ctx.window, ctx.dt);
            scene.render();
        }
    }
}

fn main() {
    let opt = Opt::from_args();
    init_logging(opt.logging());

    let mut options = match EngineOptions::load(&opt.config) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    opt.apply(&mut options);

    let mut editor = Editor {
        options: options.clone(),
        scene: None,
        failed: false,
    };

    match run(&mut editor, &options) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flag_configures_early_logging() {
        let opt = Opt::from_iter(&["simple-engine", "--log", "simple_engine=trace"]);
        assert_eq!(opt.logging().env_filter.as_deref(), Some("simple_engine=trace"));

        let opt = Opt::from_iter(&["simple-engine"]);
        assert!(opt.logging().env_filter.is_none());
    }

    #[test]
    fn flags_override_loaded_options() {
        let opt = Opt::from_iter(&["simple-engine", "--width", "640", "--title", "demo"]);
        let mut options = EngineOptions::default();
        opt.apply(&mut options);

        assert_eq!(options.window_size, (640, 768));
        assert_eq!(options.title, "demo");
        assert!(options.log_filter.is_none());
    }
}
