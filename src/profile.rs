#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,     // primary rays, one per pixel
    pub reflection_rays: usize, // mirror rays spawned at hits
    pub shadow_rays: usize,     // soft shadow marches towards the light
    pub march_steps: usize,     // scene evaluations spent sphere tracing camera and reflection rays
    pub env_hits: usize,        // rays of either kind that escaped the scene
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        reflection_rays: usize,
        shadow_rays: usize,
        march_steps: usize,
        env_hits: usize,
    ) -> Self {
        Profile {
            camera_rays,
            reflection_rays,
            shadow_rays,
            march_steps,
            env_hits,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.reflection_rays + other.reflection_rays,
            self.shadow_rays + other.shadow_rays,
            self.march_steps + other.march_steps,
            self.env_hits + other.env_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            reflection_rays,
            shadow_rays,
            march_steps,
            env_hits,
        } = self;
        let threads = threads.max(1) as f32;
        let sum = camera_rays + reflection_rays + shadow_rays;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / threads
        );
        info!(
            "{} total reflection rays at {} per second and {} per second per thread",
            reflection_rays,
            reflection_rays as f32 / elapsed,
            reflection_rays as f32 / elapsed / threads
        );
        info!(
            "{} total shadow rays at {} per second and {} per second per thread",
            shadow_rays,
            shadow_rays as f32 / elapsed,
            shadow_rays as f32 / elapsed / threads
        );
        let traced = (camera_rays + reflection_rays).max(1);
        info!(
            "{} total march steps, {} per traced ray on average",
            march_steps,
            march_steps as f32 / traced as f32
        );
        info!("{} total env hits", env_hits);
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / threads
        );
    }
}
