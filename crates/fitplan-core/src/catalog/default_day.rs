//! Built-in day plan: six meals, four supplement doses and one training session
//! sized for a 3200 kcal / 200 g protein target.

use super::ScheduleItem;
use crate::nutrition::Macros;

pub(super) fn items() -> Vec<ScheduleItem> {
    vec![
        ScheduleItem::meal(
            "breakfast",
            "07:30",
            "Breakfast",
            "Oats with whey, banana and peanut butter",
            Macros::new(40, 80, 20),
        ),
        ScheduleItem::supplement(
            "creatine",
            "07:30",
            "Creatine",
            "5 g creatine monohydrate with water",
        ),
        ScheduleItem::supplement(
            "multivitamin",
            "07:30",
            "Multivitamin",
            "One tablet with breakfast",
        ),
        ScheduleItem::meal(
            "snack",
            "10:00",
            "Mid-morning snack",
            "Greek yogurt, berries and granola",
            Macros::new(25, 40, 15),
        ),
        ScheduleItem::meal(
            "lunch",
            "13:00",
            "Lunch",
            "Chicken breast, rice and vegetables",
            Macros::new(45, 90, 20),
        ),
        ScheduleItem::supplement(
            "omega3",
            "13:00",
            "Omega-3",
            "2 g fish oil with lunch",
        ),
        ScheduleItem::meal(
            "pre-workout",
            "16:00",
            "Pre-workout meal",
            "Rice cakes, honey and a protein shake",
            Macros::new(20, 60, 5),
        ),
        ScheduleItem::workout(
            "training",
            "17:00",
            "Training session",
            "Strength block followed by 15 minutes of conditioning",
        ),
        ScheduleItem::meal(
            "post-workout",
            "18:30",
            "Post-workout shake",
            "Whey protein with dextrose",
            Macros::new(40, 60, 5),
        ),
        ScheduleItem::meal(
            "dinner",
            "20:00",
            "Dinner",
            "Salmon, potatoes and salad",
            Macros::new(45, 70, 25),
        ),
        ScheduleItem::supplement(
            "magnesium",
            "22:00",
            "Magnesium",
            "400 mg magnesium glycinate before bed",
        ),
    ]
}
