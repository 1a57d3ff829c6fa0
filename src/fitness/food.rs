/// 섭취 음식 기록. 칼로리는 입력값 그대로 합산한다(수량을 곱하지 않음).
#[derive(Debug, Clone, PartialEq)]
pub struct FoodEntry {
    pub food_item: String,
    pub quantity: u32,
    pub calories: f64,
}

pub fn log_food(food_item: &str, quantity: u32, calories: f64) -> FoodEntry {
    FoodEntry {
        food_item: food_item.trim().to_string(),
        quantity,
        calories,
    }
}
