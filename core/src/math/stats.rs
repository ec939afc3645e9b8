pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean, accumulated in `f64`. `None` for an empty sequence.
    pub fn mean<I>(samples: I) -> Option<f32>
    where
        I: IntoIterator<Item = f32>,
    {
        let (sum, count) = samples
            .into_iter()
            .fold((0.0f64, 0usize), |(sum, count), v| (sum + v as f64, count + 1));
        if count == 0 {
            return None;
        }
        Some((sum / count as f64) as f32)
    }

    pub fn min<I>(samples: I) -> Option<f32>
    where
        I: IntoIterator<Item = f32>,
    {
        samples.into_iter().reduce(f32::min)
    }

    pub fn max<I>(samples: I) -> Option<f32>
    where
        I: IntoIterator<Item = f32>,
    {
        samples.into_iter().reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(StatsHelper::mean(std::iter::empty()), None);
        assert_eq!(StatsHelper::min(Vec::new()), None);
        assert_eq!(StatsHelper::max(Vec::new()), None);
    }

    #[test]
    fn mean_handles_single_value() {
        assert_eq!(StatsHelper::mean([4.0]), Some(4.0));
        assert_eq!(StatsHelper::mean([2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn extrema_pick_ends() {
        assert_eq!(StatsHelper::min([3.0, 0.5, 2.0]), Some(0.5));
        assert_eq!(StatsHelper::max([3.0, 0.5, 2.0]), Some(3.0));
    }
}
